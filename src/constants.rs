//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Request timeout applied to every route, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

/// Base URL the client talks to when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Default sender address for outgoing notifications
pub const DEFAULT_NOTIFIER_SENDER: &str = "notifier@localhost";

/// Title given to templates created from the editor's "new" action
pub const NEW_TEMPLATE_TITLE: &str = "New template";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum template title length
pub const MAX_TEMPLATE_TITLE_LENGTH: u64 = 255;

/// Maximum template content length
pub const MAX_TEMPLATE_CONTENT_LENGTH: u64 = 65535;

/// Maximum recipients per template
pub const MAX_RECIPIENTS_PER_TEMPLATE: u64 = 100;

/// Maximum rules per template
pub const MAX_RULES_PER_TEMPLATE: u64 = 50;

/// Maximum digits before the decimal point in a price signal
pub const MAX_PRICE_INTEGER_DIGITS: u32 = 10;

/// Maximum digits after the decimal point in a price signal
pub const MAX_PRICE_FRACTION_DIGITS: u32 = 2;
