//! # vitae
//!
//! Deterministic rendering engine that converts a structured resume data
//! model into a Typst markup document.
//!
//! The pipeline is pure computation: no I/O, no shared mutable state, each
//! `parse` call independent and re-entrant. Every user-supplied text field
//! is escaped for its output context so untrusted input can never inject
//! into the generated markup. The produced string is handed verbatim to an
//! external Typst compiler.
//!
//! - **vitae-types**: the resume data model and section enumeration
//! - **vitae-markup**: context-sensitive escaping and shared Typst emitters
//! - **vitae-render**: content generators, layout formatters, header
//!   resolution, per-section renderers
//! - **vitae-template**: template policies, the fixed registry, document
//!   assembly
//!
//! ```
//! use vitae::{TemplateContext, get_template};
//!
//! let data = vitae::ResumeData::default();
//! let translate = |key: &str| key.to_owned();
//! let ctx = TemplateContext {
//!     data: &data,
//!     font: "Calibri",
//!     locale: "en",
//!     translator: &translate,
//! };
//! let document = get_template("default").parse(&ctx).unwrap();
//! assert!(document.contains("#set page"));
//! ```

// Re-export foundation crates
pub use vitae_markup as markup;
pub use vitae_types as types;

// Re-export rendering crates
pub use vitae_render as render;
pub use vitae_template as template;

// Re-export commonly used types
pub use types::{
    Achievement, Certificate, Column, Education, Experience, Language, Project, ResumeData,
    SectionKind, Skill, SocialLink, Volunteering,
};

pub use markup::{escape_content, escape_string};

pub use render::{
    ContentFragment, RendererConfig, RendererContext, Translate, render_section, resolve_header,
};

pub use template::{
    LayoutConfig, Template, TemplateContext, TemplateDescriptor, TemplateError, get_template,
    template_list,
};
