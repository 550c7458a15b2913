//! Template management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Template routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_templates))
        .route("/", post(handler::create_template))
        .route("/{id}", get(handler::get_template))
        .route("/{id}", put(handler::update_template))
        .route("/{id}", delete(handler::delete_template))
}
