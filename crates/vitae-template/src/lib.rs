//! Template layer: the top-level policy objects that turn a full rendering
//! context into a complete Typst document.
//!
//! Each template declares a layout configuration (single or two-column,
//! column ratios, which sections may move between columns) and a `parse`
//! operation that invokes the section renderers in resolved order and
//! assembles page setup, fonts, and column structure. Templates are
//! process-wide, immutable singletons registered in a fixed table; lookups
//! by unknown id fall back to the default template.

mod compact;
mod compose;
mod default;
mod registry;

pub use compact::CompactTemplate;
pub use default::DefaultTemplate;
pub use registry::{TemplateDescriptor, get_template, template_list};

use thiserror::Error;
use vitae_render::Translate;
use vitae_types::{ResumeData, SectionKind};

/// Errors raised by template parsing. Rendering is otherwise total:
/// malformed or missing optional data degrades to omitted output.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The caller contract requires a font and locale; rendering without
    /// them would silently produce incorrect output.
    #[error("invalid rendering context: {0}")]
    InvalidContext(String),
}

/// The full rendering context for one `parse` invocation. Not persisted;
/// the pipeline only reads `data` and never mutates shared state, so
/// concurrent parses need no coordination.
pub struct TemplateContext<'a> {
    pub data: &'a ResumeData,
    pub font: &'a str,
    pub locale: &'a str,
    pub translator: &'a dyn Translate,
}

impl TemplateContext<'_> {
    fn validate(&self) -> Result<(), TemplateError> {
        if self.font.trim().is_empty() {
            return Err(TemplateError::InvalidContext("font must be provided".into()));
        }
        if self.locale.trim().is_empty() {
            return Err(TemplateError::InvalidContext("locale must be provided".into()));
        }
        Ok(())
    }
}

/// Layout policy declared by a template.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    pub two_column: bool,
    /// Typst track sizes for the two columns (e.g. `2fr` / `1fr`).
    pub left_column_ratio: &'static str,
    pub right_column_ratio: &'static str,
    /// Sections the user may move between columns; all others are fixed to
    /// the template's primary column.
    pub movable_sections: &'static [SectionKind],
}

/// A visual style for the rendered resume. Implementations are stateless
/// and shared; `parse` is synchronous and produces the complete document
/// string in one call.
pub trait Template: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn layout(&self) -> &LayoutConfig;
    fn parse(&self, ctx: &TemplateContext) -> Result<String, TemplateError>;
}
