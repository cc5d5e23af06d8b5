//! Story HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::StoryError;
use crate::infrastructure::http::dto::GenerateStoryRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 500 响应的固定消息
pub const GENERATE_STORY_FAILED: &str = "Failed to generate story";

/// 生成故事
///
/// 请求体无法解析时同样视为缺少主题（超过大小上限除外）
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateStoryRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload
        .map_err(|e| ApiError::from_json_rejection(e, &StoryError::MissingTopic.to_string()))?;

    let story = state
        .generate_story_handler
        .handle(req.into())
        .await
        .map_err(|e| ApiError::from_application(e, GENERATE_STORY_FAILED))?;

    Ok(Json(story))
}
