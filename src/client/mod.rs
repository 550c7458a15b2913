//! Template API client
//!
//! [`ApiClient`] is a thin CRUD client over the HTTP API. [`TemplateEditor`]
//! holds one template being edited and persists every change immediately.

mod api;
mod editor;
mod error;

pub use api::ApiClient;
pub use editor::TemplateEditor;
pub use error::{ClientError, ClientResult};

use crate::models::{NotificationTemplate, TemplateRule};

/// Templates whose title contains `query`, ignoring case. A blank query
/// keeps everything.
pub fn filter_templates<'a>(
    templates: &'a [NotificationTemplate],
    query: &str,
) -> Vec<&'a NotificationTemplate> {
    let needle = query.trim().to_lowercase();
    templates
        .iter()
        .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
        .collect()
}

/// Display line for a stored rule, e.g. `Price is less than 100`
pub fn describe_rule(rule: &TemplateRule) -> String {
    rule.rule.to_string()
}
