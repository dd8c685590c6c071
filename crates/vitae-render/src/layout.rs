//! Layout formatters: arrange generated fragments into one joined markup
//! string per section. Formatters never touch raw user text; everything
//! reaching them is already markup-safe.

use crate::content::ContentFragment;
use crate::context::{ItemFormat, LinkOrientation, SocialLinksFormat, Spacing};
use itertools::Itertools;

/// Joins pre-formatted item strings per the section's spacing config,
/// dropping empty items.
pub fn format_section_items(items: &[String], config: &ItemFormat) -> String {
    let mut items = items.iter().filter(|i| !i.trim().is_empty());
    match config.spacing {
        Spacing::Block => items.join(&format!("\n{}\n", config.item_spacing)),
        Spacing::Inline => items.join(config.join_separator),
    }
}

/// Simple one-line-per-fragment sections (contact info, languages, skills).
pub fn format_simple_items(fragments: &[ContentFragment], config: &ItemFormat) -> String {
    let items: Vec<String> = fragments.iter().map(|f| f.content.clone()).collect();
    format_section_items(&items, config)
}

/// Heading line with the date range pushed to the right margin in a smaller
/// italic face.
fn heading_with_dates(fragment: &ContentFragment, font_size: f64) -> String {
    match &fragment.dates {
        Some(dates) => format!(
            "{} #h(1fr) #text(size: {}pt, style: \"italic\")[{dates}]",
            fragment.content,
            font_size - 1.0
        ),
        None => fragment.content.clone(),
    }
}

fn bullet_lines(details: &[String]) -> String {
    details.iter().map(|d| format!("- {d}")).join("\n")
}

/// Experience-style layout: heading + right-aligned dates, then a bulleted
/// achievement sublist.
pub fn format_experience_items(
    fragments: &[ContentFragment],
    config: &ItemFormat,
    font_size: f64,
) -> String {
    let items: Vec<String> = fragments
        .iter()
        .map(|f| {
            let mut block = heading_with_dates(f, font_size);
            if !f.details.is_empty() {
                block.push('\n');
                block.push_str(&bullet_lines(&f.details));
            }
            block
        })
        .collect();
    format_section_items(&items, config)
}

/// Education-style layout: experience layout plus a grade line when the
/// entry carries one. Detail lines are plain, not bulleted.
pub fn format_education_items(
    fragments: &[ContentFragment],
    config: &ItemFormat,
    font_size: f64,
) -> String {
    let items: Vec<String> = fragments
        .iter()
        .map(|f| {
            let mut block = heading_with_dates(f, font_size);
            for detail in &f.details {
                block.push('\n');
                block.push_str(detail);
            }
            if let Some(note) = &f.note {
                block.push('\n');
                block.push_str(note);
            }
            block
        })
        .collect();
    format_section_items(&items, config)
}

/// Project-style layout: linked title line, description below.
pub fn format_projects_items(
    fragments: &[ContentFragment],
    config: &ItemFormat,
    _font_size: f64,
) -> String {
    let items: Vec<String> = fragments
        .iter()
        .map(|f| {
            let mut block = f.content.clone();
            for detail in &f.details {
                block.push('\n');
                block.push_str(detail);
            }
            block
        })
        .collect();
    format_section_items(&items, config)
}

/// Certificate-style layout: linked title + date, issuer line, description.
pub fn format_certificates_items(
    fragments: &[ContentFragment],
    config: &ItemFormat,
    font_size: f64,
) -> String {
    let items: Vec<String> = fragments
        .iter()
        .map(|f| {
            let mut block = heading_with_dates(f, font_size);
            if let Some(issuer) = &f.note {
                block.push('\n');
                block.push_str(issuer);
            }
            for detail in &f.details {
                block.push('\n');
                block.push_str(detail);
            }
            block
        })
        .collect();
    format_section_items(&items, config)
}

/// Social links support two orientations: a vertical list for body sections
/// and a horizontal inline run for document headers.
pub fn format_social_links(fragments: &[ContentFragment], config: &SocialLinksFormat) -> String {
    let items: Vec<String> = fragments.iter().map(|f| f.content.clone()).collect();
    match config.orientation {
        LinkOrientation::Horizontal => format_section_items(
            &items,
            &ItemFormat::inline(" | "),
        ),
        LinkOrientation::Vertical => format_section_items(
            &items,
            &ItemFormat::block(vitae_markup::ITEM_SPACING),
        ),
    }
}
