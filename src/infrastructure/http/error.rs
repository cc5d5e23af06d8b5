//! HTTP Error Handling
//!
//! - 客户端输入错误: 400 `{ "error": <message> }`
//! - 请求体超过大小上限: 413 `{ "error": <message> }`
//! - 其它错误: 500 `{ "error": <固定消息>, "details": <原始错误消息> }`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Internal {
        /// 路由级固定消息，例如 "Failed to generate story"
        error: &'static str,
        details: String,
    },
}

impl ApiError {
    /// 按错误类别转换，`context` 作为 500 响应的固定消息
    pub fn from_application(err: ApplicationError, context: &'static str) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal {
                error: context,
                details: err.to_string(),
            }
        }
    }

    /// 请求体无法解析为 JSON
    ///
    /// 超过大小上限时返回 413，其余情况使用路由的 400 消息
    pub fn from_json_rejection(rejection: JsonRejection, message: &str) -> Self {
        tracing::warn!(status = rejection.status().as_u16(), rejection = %rejection, "Rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(message.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::BadRequest(msg) | ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                ErrorResponse {
                    error: msg,
                    details: None,
                }
            }
            ApiError::Internal { error, details } => {
                tracing::error!(status = status.as_u16(), error = %error, details = %details, "Request failed");
                ErrorResponse {
                    error: error.to_string(),
                    details: Some(details),
                }
            }
        };

        (status, Json(response)).into_response()
    }
}
