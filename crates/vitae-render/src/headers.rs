//! Section header resolution.
//!
//! Display headers resolve through a fallback chain, first non-empty match
//! wins: per-locale override, legacy single-locale override, then the static
//! translation table.

use crate::context::Translate;
use vitae_types::{ResumeData, SectionKind};

/// The translation-table key for a section's default header.
pub fn translation_key(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Profile => "forms.personalInfo.summary",
        SectionKind::ContactInfo => "forms.personalInfo.title",
        SectionKind::SocialLinks => "forms.personalInfo.socialLinks",
        SectionKind::Experience => "forms.experience.title",
        SectionKind::Internships => "forms.internships.title",
        SectionKind::Education => "forms.education.title",
        SectionKind::Volunteering => "forms.volunteering.title",
        SectionKind::Projects => "forms.projects.title",
        SectionKind::Skills => "forms.skills.title",
        SectionKind::Languages => "forms.languages.title",
        SectionKind::Certificates => "forms.certificates.title",
    }
}

fn nonempty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// Resolves a section's display header for the active locale.
pub fn resolve_header(
    kind: SectionKind,
    data: &ResumeData,
    locale: &str,
    translator: &dyn Translate,
) -> String {
    let key = kind.key();

    if let Some(header) = data
        .section_headers_i18n
        .get(locale)
        .and_then(|overrides| nonempty(overrides.get(key)))
    {
        return header.to_owned();
    }

    if let Some(header) = nonempty(data.section_headers.get(key)) {
        return header.to_owned();
    }

    translator.translate(translation_key(kind))
}
