//! The compact two-column template: social links move into the document
//! header as a horizontal run, and the user may redistribute the side
//! sections between columns.

use crate::compose::{identity_header, ordered_sections, partition_columns, render_column,
    two_column_grid};
use crate::{LayoutConfig, Template, TemplateContext, TemplateError};
use log::debug;
use vitae_markup::{ITEM_SPACING, document_preamble};
use vitae_render::{
    ItemFormat, LinkOrientation, LinkPlacement, RendererConfig, RendererContext,
    SocialLinksFormat, is_rtl_locale, primary_subtag, render_section,
};
use vitae_types::SectionKind;

const FONT_SIZE: f64 = 9.5;

const LAYOUT: LayoutConfig = LayoutConfig {
    two_column: true,
    left_column_ratio: "2fr",
    right_column_ratio: "1fr",
    movable_sections: &[
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Volunteering,
        SectionKind::Languages,
        SectionKind::Certificates,
    ],
};

/// Social links live in the header here; contact info gets its own labeled
/// block in a column instead of the header contact line.
const BODY_SECTIONS: [SectionKind; 10] = [
    SectionKind::Profile,
    SectionKind::Experience,
    SectionKind::Internships,
    SectionKind::Education,
    SectionKind::Volunteering,
    SectionKind::Projects,
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::ContactInfo,
    SectionKind::Certificates,
];

const CONFIG: RendererConfig = RendererConfig {
    items: ItemFormat::block(ITEM_SPACING),
    social_links: SocialLinksFormat {
        placement: LinkPlacement::Header,
        orientation: LinkOrientation::Horizontal,
    },
};

pub struct CompactTemplate;

impl Template for CompactTemplate {
    fn id(&self) -> &'static str {
        "compact"
    }

    fn name(&self) -> &'static str {
        "Compact"
    }

    fn description(&self) -> &'static str {
        "Two-column layout with movable side sections and header links"
    }

    fn layout(&self) -> &LayoutConfig {
        &LAYOUT
    }

    fn parse(&self, ctx: &TemplateContext) -> Result<String, TemplateError> {
        ctx.validate()?;
        debug!("rendering compact template, locale={}", ctx.locale);

        let rctx = RendererContext {
            translator: ctx.translator,
            locale: ctx.locale,
            config: &CONFIG,
            font_size: FONT_SIZE,
        };

        // Rendered bare (no section block) because of the Header/Horizontal
        // config; embedded into the identity header below.
        let links = render_section(SectionKind::SocialLinks, ctx.data, &rctx);

        let mut document = document_preamble(
            ctx.font,
            FONT_SIZE,
            primary_subtag(ctx.locale),
            is_rtl_locale(ctx.locale),
        );
        document.push('\n');
        document.push_str(&identity_header(ctx, Some(&links)));
        document.push('\n');

        let ordered = ordered_sections(ctx.data, &BODY_SECTIONS);
        let (left, right) = partition_columns(&ordered, ctx.data, &LAYOUT);
        let left_markup = render_column(&left, ctx.data, &rctx);
        let right_markup = render_column(&right, ctx.data, &rctx);
        document.push_str(&two_column_grid(&left_markup, &right_markup, &LAYOUT));

        Ok(document)
    }
}
