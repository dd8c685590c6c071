use serde::{Deserialize, Serialize};

/// The fixed set of independently orderable resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Profile,
    Experience,
    Internships,
    Education,
    Volunteering,
    Projects,
    Skills,
    Languages,
    ContactInfo,
    SocialLinks,
    Certificates,
}

impl SectionKind {
    /// All known sections, in canonical order. The canonical order is the
    /// stable tie-breaker for sections that carry no explicit rank.
    pub const ALL: [SectionKind; 11] = [
        SectionKind::Profile,
        SectionKind::Experience,
        SectionKind::Internships,
        SectionKind::Education,
        SectionKind::Volunteering,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::ContactInfo,
        SectionKind::SocialLinks,
        SectionKind::Certificates,
    ];

    /// The key under which this section appears in header override maps.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Profile => "profile",
            SectionKind::Experience => "experience",
            SectionKind::Internships => "internships",
            SectionKind::Education => "education",
            SectionKind::Volunteering => "volunteering",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::ContactInfo => "info",
            SectionKind::SocialLinks => "socialLinks",
            SectionKind::Certificates => "certificates",
        }
    }

    /// The key consulted in `sectionOrder`. Historically the profile
    /// section's rank was stored under `summary`, so that key takes
    /// precedence for `Profile` (see [`crate::ResumeData::section_rank`]).
    pub fn order_key(self) -> &'static str {
        match self {
            SectionKind::Profile => "summary",
            other => other.key(),
        }
    }

    /// Looks up a section by its data key. Unknown keys are ignored by the
    /// render pipeline, hence the `Option`.
    pub fn from_key(key: &str) -> Option<SectionKind> {
        match key {
            "profile" | "summary" => Some(SectionKind::Profile),
            "experience" => Some(SectionKind::Experience),
            "internships" => Some(SectionKind::Internships),
            "education" => Some(SectionKind::Education),
            "volunteering" => Some(SectionKind::Volunteering),
            "projects" => Some(SectionKind::Projects),
            "skills" => Some(SectionKind::Skills),
            "languages" => Some(SectionKind::Languages),
            "info" | "contactInfo" => Some(SectionKind::ContactInfo),
            "socialLinks" => Some(SectionKind::SocialLinks),
            "certificates" => Some(SectionKind::Certificates),
            _ => None,
        }
    }
}

/// Column assignment for two-column templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Column {
    #[default]
    Left,
    Right,
}
