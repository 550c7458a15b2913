//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod operators;
pub mod prices;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(operators::routes())
        .merge(prices::routes())
        .nest("/templates", templates::routes())
}
