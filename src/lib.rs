//! Metal Notifier - price signal notification templates
//!
//! This library provides the service and client for managing notification
//! templates. A template holds a title, free-text content, a list of email
//! recipients, and a conjunctive set of price/metal-type rules; when a price
//! signal satisfies every rule, each recipient is notified.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Template store access
//! - **Models**: Domain models
//! - **Client**: HTTP client and editing session for the template API
//!
//! Rule semantics live in the `notifier-rules` crate.

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

use std::time::Duration;

use axum::{http::StatusCode, middleware as axum_middleware, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::CorsOrigin,
    constants::{API_BASE_PATH, REQUEST_TIMEOUT_SECS},
};

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    let allow_origin = match &state.config().server.cors_origin {
        CorsOrigin::Any => AllowOrigin::any(),
        CorsOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
