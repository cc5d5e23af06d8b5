//! HTTP Routes
//!
//! API Endpoints:
//! - /api/generate-story    POST  生成故事、理解题和朗读音频
//! - /api/evaluate-answers  POST  批改答案
//! - /api/ping              GET   健康检查
//! - /*                     GET   public 目录静态文件（含 /audios/<requestId>.mp3）

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(public_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback_service(ServeDir::new(public_dir))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/generate-story", post(handlers::generate_story))
        .route("/evaluate-answers", post(handlers::evaluate_answers))
}
