//! Price signal handler implementations

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use notifier_rules::PricedItem;
use validator::Validate;

use crate::{error::AppResult, services::NotificationService, state::AppState};

use super::{request::MetalPriceRequest, response::DispatchResponse};

/// Evaluate every template against a new price and notify the matches
pub async fn receive_new_price(
    State(state): State<AppState>,
    payload: Result<Json<MetalPriceRequest>, JsonRejection>,
) -> AppResult<Json<DispatchResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let summary = NotificationService::process_new_price(
        state.store(),
        state.email(),
        &state.config().notifier.sender,
        &PricedItem::from(&payload),
    )
    .await;

    Ok(Json(DispatchResponse {
        message: "Notification processed".to_string(),
        summary,
    }))
}
