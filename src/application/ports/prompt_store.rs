//! Prompt Store Port - 模板读取

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PromptKind, PromptTemplate};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read prompt template {name}: {message}")]
    ReadFailed { name: &'static str, message: String },
}

/// Prompt Store Port
///
/// 每次调用都重新读取，不做跨请求缓存
#[async_trait]
pub trait PromptStorePort: Send + Sync {
    async fn load(&self, kind: PromptKind) -> Result<PromptTemplate, PromptError>;
}
