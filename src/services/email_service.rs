//! Email delivery

use async_trait::async_trait;

use crate::models::NotificationTemplate;
use notifier_rules::PricedItem;

/// A rendered notification ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    /// Render the notification a template sends for a price signal
    pub fn render(
        from: &str,
        to: &str,
        template: &NotificationTemplate,
        item: &PricedItem,
    ) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: template.title.clone(),
            body: format!(
                "{}\n\nMetal notification: {} : {}",
                template.content, item.price, item.metal_type
            ),
        }
    }
}

/// Outgoing email transport
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()>;
}

/// Sender that writes every notification to the log instead of delivering it
#[derive(Debug, Clone)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            "Sending notification"
        );
        tracing::info!("{}", email.body);
        Ok(())
    }
}
