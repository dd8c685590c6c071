//! Typst text layer: context-sensitive escaping of untrusted text and the
//! small set of markup emitters shared by all templates.
//!
//! Typst treats `#` as "leave content mode, evaluate as code" even inside
//! nested blocks, so any user text concatenated into body content must have
//! every structurally significant character neutralized. Text passed as a
//! quoted string argument only needs the two characters that terminate or
//! alter a string literal. The two [`escape`] modes implement exactly that
//! split.

pub mod escape;
pub mod typst;

pub use escape::{escape_content, escape_content_opt, escape_string, escape_string_opt};
pub use typst::{
    HeaderRenderer, ITEM_SPACING, SECTION_SPACING, document_preamble, render_section_header,
    wrap_in_section_block,
};
