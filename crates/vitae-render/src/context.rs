//! Rendering context and per-template formatting configuration.

/// Translation lookup supplied by the caller. The contract requires that
/// lookup never fails; unknown keys return the key itself or an empty
/// string, at the caller's discretion.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// How items within a section are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Items are stacked as blocks with vertical spacing between them.
    Block,
    /// Items are joined inline with a separator string.
    Inline,
}

/// Formatting configuration for a section's item list.
#[derive(Debug, Clone, Copy)]
pub struct ItemFormat {
    pub spacing: Spacing,
    /// Markup inserted between block items (e.g. a `#v(..)` directive).
    pub item_spacing: &'static str,
    /// Separator used when `spacing` is [`Spacing::Inline`].
    pub join_separator: &'static str,
}

impl ItemFormat {
    pub const fn block(item_spacing: &'static str) -> Self {
        ItemFormat { spacing: Spacing::Block, item_spacing, join_separator: "" }
    }

    pub const fn inline(join_separator: &'static str) -> Self {
        ItemFormat { spacing: Spacing::Inline, item_spacing: "", join_separator }
    }
}

/// Where a template places the social links block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPlacement {
    /// Rendered as a regular body section with its own header.
    Section,
    /// Rendered bare, for inclusion in the document header.
    Header,
}

/// How social links are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLinksFormat {
    pub placement: LinkPlacement,
    pub orientation: LinkOrientation,
}

/// Formatting policy a template hands to the section renderers.
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    pub items: ItemFormat,
    pub social_links: SocialLinksFormat,
}

/// Everything a section renderer needs besides the resume data itself.
/// Constructed per render call; lifetime is one `parse` invocation.
pub struct RendererContext<'a> {
    pub translator: &'a dyn Translate,
    pub locale: &'a str,
    pub config: &'a RendererConfig,
    pub font_size: f64,
}
