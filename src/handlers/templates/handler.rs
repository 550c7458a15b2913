//! Template handler implementations

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::NotificationTemplate,
    services::TemplateService,
    state::AppState,
};

use super::request::{ListTemplatesQuery, TemplateRequest};

/// List all templates
pub async fn list_templates(
    State(state): State<AppState>,
    query: Result<Query<ListTemplatesQuery>, QueryRejection>,
) -> AppResult<Json<Vec<NotificationTemplate>>> {
    let Query(query) = query?;

    let templates = TemplateService::list_templates(state.store(), query.search.as_deref()).await?;
    Ok(Json(templates))
}

/// Create a new template
pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<TemplateRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<NotificationTemplate>)> {
    let Json(payload) = payload?;
    payload.validate()?;

    let template = TemplateService::create_template(state.store(), payload).await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// Get a specific template
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<NotificationTemplate>> {
    let template = TemplateService::get_template(state.store(), id).await?;
    Ok(Json(template))
}

/// Replace a template
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<TemplateRequest>, JsonRejection>,
) -> AppResult<Json<NotificationTemplate>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let template = TemplateService::update_template(state.store(), id, payload).await?;

    Ok(Json(template))
}

/// Delete a template
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    TemplateService::delete_template(state.store(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
