//! Per-section renderers: each composes a content generator, a layout
//! formatter, and the resolved localized header into one markup block, or an
//! empty string when the section has no data.

use crate::content::{
    generate_certificates_content, generate_contact_content, generate_education_content,
    generate_experience_content, generate_languages_content, generate_projects_content,
    generate_skills_content, generate_social_links_content, generate_volunteering_content,
};
use crate::context::{LinkOrientation, LinkPlacement, RendererContext};
use crate::headers::resolve_header;
use crate::layout::{
    format_certificates_items, format_education_items, format_experience_items,
    format_projects_items, format_simple_items, format_social_links,
};
use log::trace;
use vitae_markup::{escape_content, render_section_header, wrap_in_section_block};
use vitae_types::{ResumeData, SectionKind};

/// Renders one section of the resume. Empty sections render as the empty
/// string; callers skip them when assembling the document.
pub fn render_section(kind: SectionKind, data: &ResumeData, ctx: &RendererContext) -> String {
    let block = match kind {
        SectionKind::Experience => render_experience_like(kind, &data.experiences, data, ctx),
        SectionKind::Internships => render_experience_like(kind, &data.internships, data, ctx),
        SectionKind::Education => render_education(data, ctx),
        SectionKind::Volunteering => render_volunteering(data, ctx),
        SectionKind::Projects => render_projects(data, ctx),
        SectionKind::Skills => render_skills(data, ctx),
        SectionKind::Languages => render_languages(data, ctx),
        SectionKind::ContactInfo => render_contact_info(data, ctx),
        SectionKind::SocialLinks => render_social_links(data, ctx),
        SectionKind::Profile => render_profile(data, ctx),
        SectionKind::Certificates => render_certificates(data, ctx),
    };
    if block.is_empty() {
        trace!("section {:?} elided (no content)", kind);
    }
    block
}

fn wrap(kind: SectionKind, body: &str, data: &ResumeData, ctx: &RendererContext) -> String {
    let header = resolve_header(kind, data, ctx.locale, ctx.translator);
    wrap_in_section_block(&header, body, ctx.font_size, render_section_header)
}

fn render_experience_like(
    kind: SectionKind,
    entries: &[vitae_types::Experience],
    data: &ResumeData,
    ctx: &RendererContext,
) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let fragments = generate_experience_content(entries, ctx.translator);
    let body = format_experience_items(&fragments, &ctx.config.items, ctx.font_size);
    wrap(kind, &body, data, ctx)
}

fn render_volunteering(data: &ResumeData, ctx: &RendererContext) -> String {
    if data.volunteering.is_empty() {
        return String::new();
    }
    let fragments = generate_volunteering_content(&data.volunteering, ctx.translator);
    let body = format_experience_items(&fragments, &ctx.config.items, ctx.font_size);
    wrap(SectionKind::Volunteering, &body, data, ctx)
}

fn render_education(data: &ResumeData, ctx: &RendererContext) -> String {
    if data.education.is_empty() {
        return String::new();
    }
    let fragments = generate_education_content(&data.education, ctx.translator);
    let body = format_education_items(&fragments, &ctx.config.items, ctx.font_size);
    wrap(SectionKind::Education, &body, data, ctx)
}

fn render_projects(data: &ResumeData, ctx: &RendererContext) -> String {
    if data.projects.is_empty() {
        return String::new();
    }
    let fragments = generate_projects_content(&data.projects);
    if fragments.is_empty() {
        return String::new();
    }
    let body = format_projects_items(&fragments, &ctx.config.items, ctx.font_size);
    wrap(SectionKind::Projects, &body, data, ctx)
}

/// Structured skill entries take precedence; the legacy free-text
/// `technicalSkills` field is used only when the structured list is absent.
fn render_skills(data: &ResumeData, ctx: &RendererContext) -> String {
    if !data.skills.is_empty() {
        let fragments = generate_skills_content(&data.skills);
        if fragments.is_empty() {
            return String::new();
        }
        let body = format_simple_items(&fragments, &ctx.config.items);
        return wrap(SectionKind::Skills, &body, data, ctx);
    }

    if data.technical_skills.trim().is_empty() {
        return String::new();
    }
    let body = escape_content(&data.technical_skills);
    wrap(SectionKind::Skills, &body, data, ctx)
}

fn render_languages(data: &ResumeData, ctx: &RendererContext) -> String {
    if data.languages.is_empty() {
        return String::new();
    }
    let fragments = generate_languages_content(&data.languages, ctx.translator);
    if fragments.is_empty() {
        return String::new();
    }
    let body = format_simple_items(&fragments, &ctx.config.items);
    wrap(SectionKind::Languages, &body, data, ctx)
}

fn render_contact_info(data: &ResumeData, ctx: &RendererContext) -> String {
    let fragments = generate_contact_content(data);
    if fragments.is_empty() {
        return String::new();
    }
    let body = format_simple_items(&fragments, &ctx.config.items);
    wrap(SectionKind::ContactInfo, &body, data, ctx)
}

fn render_social_links(data: &ResumeData, ctx: &RendererContext) -> String {
    let fragments = generate_social_links_content(data);
    if fragments.is_empty() {
        return String::new();
    }
    let config = &ctx.config.social_links;
    let body = format_social_links(&fragments, config);

    // Header-placed horizontal links are embedded bare by the template.
    if config.placement == LinkPlacement::Header
        && config.orientation == LinkOrientation::Horizontal
    {
        return body;
    }
    wrap(SectionKind::SocialLinks, &body, data, ctx)
}

fn render_profile(data: &ResumeData, ctx: &RendererContext) -> String {
    if data.summary.trim().is_empty() {
        return String::new();
    }
    let body = escape_content(&data.summary);
    wrap(SectionKind::Profile, &body, data, ctx)
}

fn render_certificates(data: &ResumeData, ctx: &RendererContext) -> String {
    if data.certificates.is_empty() {
        return String::new();
    }
    let fragments = generate_certificates_content(&data.certificates);
    if fragments.is_empty() {
        return String::new();
    }
    let body = format_certificates_items(&fragments, &ctx.config.items, ctx.font_size);
    wrap(SectionKind::Certificates, &body, data, ctx)
}
