//! Client error types

use notifier_rules::RuleError;

/// Errors returned by [`super::ApiClient`] and [`super::TemplateEditor`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("No recipient with id {0}")]
    UnknownRecipient(i64),

    #[error("No rule with id {0}")]
    UnknownRule(i64),
}

impl ClientError {
    /// HTTP status of a server-side failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;
