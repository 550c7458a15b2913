//! Evaluation subject.

use serde::{Deserialize, Serialize};

/// The thing a rule set is evaluated against: a metal type and its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    pub metal_type: String,
    pub price: f64,
}

impl PricedItem {
    pub fn new(metal_type: impl Into<String>, price: f64) -> Self {
        Self {
            metal_type: metal_type.into(),
            price,
        }
    }
}
