//! Ping Handler

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// 故事接口是否在返回 fixture
    pub mock_mode: bool,
}

/// 健康检查，不访问任何外部服务
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        mock_mode: state.mock_mode,
    })
}
