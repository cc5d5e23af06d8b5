//! Evaluation HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::handlers::INVALID_EVALUATION_REQUEST;
use crate::infrastructure::http::dto::EvaluateAnswersRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 500 响应的固定消息
pub const EVALUATE_ANSWERS_FAILED: &str = "Failed to evaluate answers";

/// 批改答案
pub async fn evaluate_answers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EvaluateAnswersRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) =
        payload.map_err(|e| ApiError::from_json_rejection(e, INVALID_EVALUATION_REQUEST))?;

    let evaluation = state
        .evaluate_answers_handler
        .handle(req.into())
        .await
        .map_err(|e| ApiError::from_application(e, EVALUATE_ANSWERS_FAILED))?;

    Ok(Json(evaluation))
}
