//! Input validation utilities

use std::borrow::Cow;

use notifier_rules::MetalType;
use validator::ValidationError;

use crate::constants::{MAX_PRICE_FRACTION_DIGITS, MAX_PRICE_INTEGER_DIGITS};

/// Reject titles that are empty once sanitized
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if sanitize_string(title).is_empty() {
        return Err(error("blank", "Title cannot be blank"));
    }
    Ok(())
}

/// Validate a price signal's metal type
pub fn validate_metal_type(item_type: &str) -> Result<(), ValidationError> {
    item_type
        .parse::<MetalType>()
        .map(|_| ())
        .map_err(|_| error("metal_type", "Metal type must be one of: gold, silver, platinum"))
}

/// Validate that a price is non-negative and fits the fixed-point shape
/// prices are quoted in
pub fn validate_price_precision(price: f64) -> Result<(), &'static str> {
    if !price.is_finite() || price < 0.0 {
        return Err("Price cannot be negative");
    }
    if price >= 10f64.powi(MAX_PRICE_INTEGER_DIGITS as i32) {
        return Err("Price has too many integer digits");
    }

    // Shortest round-trip form recovers the decimal the caller sent
    let fraction_digits = price
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    if fraction_digits > MAX_PRICE_FRACTION_DIGITS as usize {
        return Err("Price can have at most 2 decimal places");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
