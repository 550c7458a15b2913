//! Business logic services

pub mod email_service;
pub mod notification_service;
pub mod template_service;

pub use email_service::{EmailSender, LoggingEmailSender, OutgoingEmail};
pub use notification_service::{DispatchSummary, NotificationService};
pub use template_service::TemplateService;
