//! Shared Typst emitters: document preamble, section headers, spacing.

use crate::escape::{escape_content, escape_string};

/// Vertical spacing inserted between items inside a section.
pub const ITEM_SPACING: &str = "#v(4pt)";

/// Vertical spacing inserted between sections.
pub const SECTION_SPACING: &str = "#v(10pt)";

/// Signature shared by section header emitters, so templates can swap the
/// header style without touching the section pipeline.
pub type HeaderRenderer = fn(&str, f64) -> String;

/// Renders a localized section header followed by a rule, for a body text
/// size of `font_size` points. The header text is treated as untrusted
/// (overrides come from user data) and escaped here.
pub fn render_section_header(header: &str, font_size: f64) -> String {
    format!(
        "#text(size: {}pt, weight: \"bold\")[{}]\n#v(2pt)\n#line(length: 100%, stroke: 0.6pt)",
        font_size + 2.0,
        escape_content(header)
    )
}

/// Wraps a section body in its block: the resolved header rendered through
/// `header_renderer`, then the body. An empty body elides the section
/// entirely and returns the empty string.
pub fn wrap_in_section_block(
    header: &str,
    body: &str,
    font_size: f64,
    header_renderer: HeaderRenderer,
) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    format!("{}\n{}\n", header_renderer(header, font_size), body)
}

/// Emits page setup and base text settings. `lang` is the primary locale
/// subtag; `rtl` switches the text direction for right-to-left scripts.
pub fn document_preamble(font: &str, font_size: f64, lang: &str, rtl: bool) -> String {
    let dir = if rtl { ", dir: rtl" } else { "" };
    format!(
        "#set page(margin: (x: 1.4cm, y: 1.2cm))\n\
         #set text(font: \"{}\", size: {}pt, lang: \"{}\"{})\n\
         #set par(justify: true)\n",
        escape_string(font),
        font_size,
        escape_string(lang),
        dir
    )
}
