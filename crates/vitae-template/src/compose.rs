//! Shared document assembly: section ordering, the identity header, and
//! column composition. Both templates build on these.

use crate::{LayoutConfig, TemplateContext};
use itertools::Itertools;
use vitae_markup::{SECTION_SPACING, escape_content};
use vitae_render::{RendererContext, render_section};
use vitae_types::{Column, ResumeData, SectionKind};

/// Sorts a template's body sections by their `sectionOrder` rank, ascending.
/// Sections without a rank sort last, keeping their relative order (the
/// sort is stable over the template's declared order).
pub(crate) fn ordered_sections(data: &ResumeData, sections: &[SectionKind]) -> Vec<SectionKind> {
    let mut ordered = sections.to_vec();
    ordered.sort_by_key(|kind| data.section_rank(*kind).unwrap_or(i64::MAX));
    ordered
}

/// Renders the identity block at the top of the document: name, position,
/// contact line, and optionally a horizontal social links run.
pub(crate) fn identity_header(ctx: &TemplateContext, social_links: Option<&str>) -> String {
    let data = ctx.data;
    let mut parts: Vec<String> = Vec::new();

    let name = [data.first_name.as_str(), data.last_name.as_str()]
        .iter()
        .map(|part| escape_content(part))
        .filter(|part| !part.is_empty())
        .join(" ");
    if !name.is_empty() {
        parts.push(format!("#text(size: 20pt, weight: \"bold\")[{name}]"));
    }

    let position = escape_content(&data.position);
    if !position.is_empty() {
        parts.push(format!("#text(size: 12pt)[{position}]"));
    }

    let contact = [data.email.as_str(), data.phone.as_str(), data.location.as_str()]
        .iter()
        .map(|part| escape_content(part))
        .filter(|part| !part.is_empty())
        .join(" | ");
    if !contact.is_empty() {
        parts.push(contact);
    }

    if let Some(links) = social_links
        && !links.is_empty()
    {
        parts.push(links.to_owned());
    }

    if parts.is_empty() {
        return String::new();
    }
    format!("#align(center)[\n{}\n]\n", parts.join("\n\n"))
}

/// Renders sections in order and concatenates the non-empty blocks with
/// inter-section spacing.
pub(crate) fn render_column(
    sections: &[SectionKind],
    data: &ResumeData,
    rctx: &RendererContext,
) -> String {
    sections
        .iter()
        .map(|kind| render_section(*kind, data, rctx))
        .filter(|block| !block.is_empty())
        .join(&format!("{SECTION_SPACING}\n"))
}

/// Splits ordered sections into left/right columns. Movable sections follow
/// the user's `sectionPlacement`; everything else is fixed to the left
/// (primary) column.
pub(crate) fn partition_columns(
    ordered: &[SectionKind],
    data: &ResumeData,
    layout: &LayoutConfig,
) -> (Vec<SectionKind>, Vec<SectionKind>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for kind in ordered {
        let column = if layout.movable_sections.contains(kind) {
            data.section_column(*kind).unwrap_or_default()
        } else {
            Column::Left
        };
        match column {
            Column::Left => left.push(*kind),
            Column::Right => right.push(*kind),
        }
    }
    (left, right)
}

/// Emits the two columns side by side per the layout's track ratios.
pub(crate) fn two_column_grid(left: &str, right: &str, layout: &LayoutConfig) -> String {
    format!(
        "#grid(\n  columns: ({}, {}),\n  column-gutter: 14pt,\n  [\n{left}\n  ],\n  [\n{right}\n  ],\n)\n",
        layout.left_column_ratio, layout.right_column_ratio
    )
}
