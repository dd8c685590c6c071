//! The default single-column template.

use crate::compose::{identity_header, ordered_sections, render_column};
use crate::{LayoutConfig, Template, TemplateContext, TemplateError};
use log::debug;
use vitae_markup::{ITEM_SPACING, document_preamble};
use vitae_render::{
    ItemFormat, LinkOrientation, LinkPlacement, RendererConfig, RendererContext,
    SocialLinksFormat, is_rtl_locale, primary_subtag,
};
use vitae_types::SectionKind;

const FONT_SIZE: f64 = 10.0;

const LAYOUT: LayoutConfig = LayoutConfig {
    two_column: false,
    left_column_ratio: "1fr",
    right_column_ratio: "1fr",
    movable_sections: &[],
};

/// Body sections in declared order; `sectionOrder` ranks re-order these,
/// unranked sections keep this relative order. Contact details render in
/// the identity header, social links as a vertical body section.
const BODY_SECTIONS: [SectionKind; 10] = [
    SectionKind::Profile,
    SectionKind::Experience,
    SectionKind::Internships,
    SectionKind::Education,
    SectionKind::Volunteering,
    SectionKind::Projects,
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::SocialLinks,
    SectionKind::Certificates,
];

const CONFIG: RendererConfig = RendererConfig {
    items: ItemFormat::block(ITEM_SPACING),
    social_links: SocialLinksFormat {
        placement: LinkPlacement::Section,
        orientation: LinkOrientation::Vertical,
    },
};

pub struct DefaultTemplate;

impl Template for DefaultTemplate {
    fn id(&self) -> &'static str {
        "default"
    }

    fn name(&self) -> &'static str {
        "Default"
    }

    fn description(&self) -> &'static str {
        "Single-column layout with classic section blocks"
    }

    fn layout(&self) -> &LayoutConfig {
        &LAYOUT
    }

    fn parse(&self, ctx: &TemplateContext) -> Result<String, TemplateError> {
        ctx.validate()?;
        debug!("rendering default template, locale={}", ctx.locale);

        let rctx = RendererContext {
            translator: ctx.translator,
            locale: ctx.locale,
            config: &CONFIG,
            font_size: FONT_SIZE,
        };

        let mut document = document_preamble(
            ctx.font,
            FONT_SIZE,
            primary_subtag(ctx.locale),
            is_rtl_locale(ctx.locale),
        );
        document.push('\n');
        document.push_str(&identity_header(ctx, None));
        document.push('\n');

        let ordered = ordered_sections(ctx.data, &BODY_SECTIONS);
        document.push_str(&render_column(&ordered, ctx.data, &rctx));

        Ok(document)
    }
}
