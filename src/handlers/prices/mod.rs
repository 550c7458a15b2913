//! Price signal handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Price signal routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/new-price", post(handler::receive_new_price))
}
