//! Section rendering pipeline: content generators, layout formatters,
//! header resolution, and the per-section renderer dispatch.
//!
//! The pipeline is pure computation over a borrowed [`ResumeData`]: content
//! generators escape and extract fields into [`ContentFragment`]s, layout
//! formatters arrange fragments into markup, and [`render_section`] composes
//! the two with a localized section header, or returns an empty string when
//! the section has no data.

pub mod content;
pub mod context;
pub mod dates;
pub mod headers;
pub mod layout;
pub mod locale;
pub mod sections;

pub use content::ContentFragment;
pub use context::{
    ItemFormat, LinkOrientation, LinkPlacement, RendererConfig, RendererContext,
    SocialLinksFormat, Spacing, Translate,
};
pub use dates::{format_date_range, format_month};
pub use headers::{resolve_header, translation_key};
pub use locale::{is_rtl_locale, primary_subtag};
pub use sections::render_section;

#[doc(inline)]
pub use vitae_types::SectionKind;
