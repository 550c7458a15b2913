//! Price signal response DTOs

use serde::{Deserialize, Serialize};

use crate::services::DispatchSummary;

/// Result of processing a price signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub message: String,

    #[serde(flatten)]
    pub summary: DispatchSummary,
}
