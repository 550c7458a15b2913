//! Operator catalog handler
//!
//! Lets editors build their operator and metal pickers from the server's
//! catalog instead of hard-coding it.

use axum::{routing::get, Json, Router};
use notifier_rules::{MetalType, OperandKind, Operator};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorResponse {
    pub operator: Operator,
    pub label: String,
    pub operand_kind: OperandKind,
}

/// Operator catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub operators: Vec<OperatorResponse>,
    pub metal_types: Vec<MetalType>,
}

/// List supported operators and metal types
async fn list_operators() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        operators: Operator::ALL
            .into_iter()
            .map(|operator| OperatorResponse {
                operator,
                label: operator.label().to_string(),
                operand_kind: operator.operand_kind(),
            })
            .collect(),
        metal_types: MetalType::ALL.to_vec(),
    })
}

/// Operator catalog routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/operators", get(list_operators))
}
