//! Chat Completion Port - 大语言模型对话补全抽象
//!
//! 定义对话补全的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// LLM 错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 对话补全请求，模型输出固定为 JSON 对象
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// system 角色指令
    pub system: String,
    /// user 角色内容（填充后的模板）
    pub user: String,
    /// 采样温度
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>, temperature: f32) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
        }
    }
}

/// Chat Completion Port
///
/// 返回第一个候选的文本内容；模型没有给出内容时返回 `None`
#[async_trait]
pub trait ChatCompletionPort: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<Option<String>, LlmError>;
}
