//! Notification template model

use notifier_rules::Rule;
use serde::{Deserialize, Serialize};

/// A notification template: who gets notified, with what text, and under
/// which price conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub recipients: Vec<Recipient>,
    pub rules: Vec<TemplateRule>,
}

/// Email recipient of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: i64,
    pub email: String,
}

/// A rule as stored on a template. The id lets clients remove one entry
/// without resending the others' identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRule {
    pub id: i64,
    #[serde(flatten)]
    pub rule: Rule,
}

impl NotificationTemplate {
    /// The template's rules without their ids, in order
    pub fn rule_set(&self) -> Vec<Rule> {
        self.rules.iter().map(|r| r.rule.clone()).collect()
    }
}

/// Template contents before the store assigns ids.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDraft {
    pub title: String,
    pub content: String,
    pub recipients: Vec<RecipientDraft>,
    pub rules: Vec<RuleDraft>,
}

/// Recipient entry of a draft; `id` is set when the entry already exists
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientDraft {
    pub id: Option<i64>,
    pub email: String,
}

/// Rule entry of a draft; `id` is set when the entry already exists
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDraft {
    pub id: Option<i64>,
    pub rule: Rule,
}
