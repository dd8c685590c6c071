//! The fixed template table. Built once at first use and never mutated;
//! the template set is known at build time, so no registration API exists.

use crate::{CompactTemplate, DefaultTemplate, Template};
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

static TEMPLATES: Lazy<Vec<&'static dyn Template>> =
    Lazy::new(|| vec![&DefaultTemplate, &CompactTemplate]);

/// Looks up a template by id. Unknown ids resolve to the default template
/// rather than failing.
pub fn get_template(id: &str) -> &'static dyn Template {
    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.id() == id)
        .unwrap_or_else(|| {
            debug!("unknown template id '{id}', falling back to default");
            TEMPLATES[0]
        })
}

/// Read-only template descriptor for UI selection lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub two_column: bool,
}

pub fn template_list() -> Vec<TemplateDescriptor> {
    TEMPLATES
        .iter()
        .map(|t| TemplateDescriptor {
            id: t.id(),
            name: t.name(),
            description: t.description(),
            two_column: t.layout().two_column,
        })
        .collect()
}
