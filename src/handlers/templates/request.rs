//! Template request DTOs

use notifier_rules::Operator;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{
        MAX_RECIPIENTS_PER_TEMPLATE, MAX_RULES_PER_TEMPLATE, MAX_TEMPLATE_CONTENT_LENGTH,
        MAX_TEMPLATE_TITLE_LENGTH,
    },
    models::NotificationTemplate,
    utils::validate_title,
};

/// Create or replace a template. Used for both POST and PUT; a PUT replaces
/// the whole template.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TemplateRequest {
    #[validate(
        length(min = 1, max = MAX_TEMPLATE_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(max = MAX_TEMPLATE_CONTENT_LENGTH))]
    pub content: Option<String>,

    #[serde(default)]
    #[validate(length(max = MAX_RECIPIENTS_PER_TEMPLATE), nested)]
    pub recipients: Vec<RecipientRequest>,

    /// Checked against the operator catalog by the service, not here
    #[serde(default)]
    #[validate(length(max = MAX_RULES_PER_TEMPLATE))]
    pub rules: Vec<RuleRequest>,
}

/// Recipient entry; `id` is absent for new recipients
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipientRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Rule entry; `id` is absent for new rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub operator: Operator,

    pub operand: String,
}

/// List templates query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListTemplatesQuery {
    /// Case-insensitive title substring
    pub search: Option<String>,
}

impl From<&NotificationTemplate> for TemplateRequest {
    fn from(template: &NotificationTemplate) -> Self {
        Self {
            title: template.title.clone(),
            content: Some(template.content.clone()),
            recipients: template
                .recipients
                .iter()
                .map(|r| RecipientRequest {
                    id: Some(r.id),
                    email: r.email.clone(),
                })
                .collect(),
            rules: template
                .rules
                .iter()
                .map(|r| RuleRequest {
                    id: Some(r.id),
                    operator: r.rule.operator(),
                    operand: r.rule.operand().to_string(),
                })
                .collect(),
        }
    }
}
