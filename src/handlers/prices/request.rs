//! Price signal request DTOs

use std::borrow::Cow;

use notifier_rules::PricedItem;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::{validate_metal_type, validate_price_precision};

/// A new price quote for one metal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_price"))]
pub struct MetalPriceRequest {
    #[validate(custom(function = "validate_metal_type"))]
    pub item_type: String,

    pub price: f64,
}

fn validate_price(request: &MetalPriceRequest) -> Result<(), ValidationError> {
    validate_price_precision(request.price)
        .map_err(|message| ValidationError::new("price").with_message(Cow::Borrowed(message)))
}

impl From<&MetalPriceRequest> for PricedItem {
    fn from(request: &MetalPriceRequest) -> Self {
        PricedItem::new(request.item_type.clone(), request.price)
    }
}
