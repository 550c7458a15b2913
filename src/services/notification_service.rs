//! Price signal dispatch

use notifier_rules::{evaluate_rule_set, PricedItem, Rule};
use serde::{Deserialize, Serialize};

use crate::{
    db::{repositories::TemplateRepository, TemplateStore},
    models::NotificationTemplate,
    services::email_service::{EmailSender, OutgoingEmail},
};

/// Outcome of dispatching one price signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSummary {
    pub templates_matched: usize,
    pub emails_sent: usize,
    pub emails_failed: usize,
}

/// Notification service for business logic
pub struct NotificationService;

impl NotificationService {
    /// Send every matching template to each of its recipients.
    ///
    /// Works on a snapshot of the store, so no lock is held while sending.
    /// A failed send is logged and counted; it does not stop the dispatch.
    pub async fn process_new_price(
        store: &TemplateStore,
        sender: &dyn EmailSender,
        from: &str,
        item: &PricedItem,
    ) -> DispatchSummary {
        let templates = TemplateRepository::list(store, None).await;
        let mut summary = DispatchSummary::default();

        for template in templates.iter().filter(|t| Self::matches(t, item)) {
            summary.templates_matched += 1;

            for recipient in &template.recipients {
                let email = OutgoingEmail::render(from, &recipient.email, template, item);
                match sender.send(&email).await {
                    Ok(()) => summary.emails_sent += 1,
                    Err(e) => {
                        tracing::warn!(
                            template_id = template.id,
                            recipient = %recipient.email,
                            "Failed to send notification: {:#}",
                            e
                        );
                        summary.emails_failed += 1;
                    }
                }
            }
        }

        tracing::info!(
            metal_type = %item.metal_type,
            price = item.price,
            templates_matched = summary.templates_matched,
            emails_sent = summary.emails_sent,
            "Price signal processed"
        );

        summary
    }

    /// Whether a template fires for this item.
    ///
    /// Templates without rules never fire. Malformed rules are dropped from
    /// the conjunction with a warning; if nothing well-formed is left the
    /// template does not fire either.
    pub fn matches(template: &NotificationTemplate, item: &PricedItem) -> bool {
        let rules: Vec<Rule> = template
            .rules
            .iter()
            .filter(|entry| match entry.rule.check() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(
                        template_id = template.id,
                        rule_id = entry.id,
                        "Skipping rule: {}",
                        e
                    );
                    false
                }
            })
            .map(|entry| entry.rule.clone())
            .collect();

        if rules.is_empty() {
            return false;
        }

        match evaluate_rule_set(&rules, item) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!(template_id = template.id, "Rule evaluation failed: {}", e);
                false
            }
        }
    }
}
