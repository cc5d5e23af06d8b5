//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, LlmError, PromptError, TtsError};
use crate::domain::StoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求参数错误（客户端问题）
    #[error("{0}")]
    ValidationError(String),

    /// 外部服务错误（LLM、TTS、模型输出不符合约定）
    #[error("{0}")]
    ExternalServiceError(String),

    /// 存储错误（模板读取、音频写入）
    #[error("{0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 是否为客户端输入错误
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

impl From<StoryError> for ApplicationError {
    fn from(err: StoryError) -> Self {
        match err {
            StoryError::MissingTopic => Self::ValidationError(err.to_string()),
            _ => Self::ExternalServiceError(err.to_string()),
        }
    }
}

impl From<LlmError> for ApplicationError {
    fn from(err: LlmError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<PromptError> for ApplicationError {
    fn from(err: PromptError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for ApplicationError {
    fn from(err: serde_json::Error) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_topic_is_client_error() {
        let err = ApplicationError::from(StoryError::MissingTopic);
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Topic is required");
    }

    #[test]
    fn test_story_errors_keep_message() {
        let err = ApplicationError::from(StoryError::StoryTooLong { length: 600 });
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Story is too long");
    }

    #[test]
    fn test_storage_errors() {
        let err = ApplicationError::from(AudioStorageError::IoError("disk full".into()));
        assert!(matches!(err, ApplicationError::StorageError(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
