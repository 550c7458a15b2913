//! Utility functions

pub mod validation;

pub use validation::{sanitize_string, validate_metal_type, validate_price_precision, validate_title};
