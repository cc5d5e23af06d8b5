//! Story Generator Port - 故事生成策略
//!
//! 真实实现调用 LLM + TTS，mock 模式下替换为固定 fixture 实现。
//! 两者在启动时选定并注入，业务代码不再检查环境变量。

use async_trait::async_trait;
use serde_json::Value;

use crate::application::error::ApplicationError;
use crate::domain::{AnswerType, Topic};

#[async_trait]
pub trait StoryGeneratorPort: Send + Sync {
    /// 生成故事，返回给客户端的完整 JSON
    async fn generate(&self, topic: &Topic, answer_type: AnswerType)
        -> Result<Value, ApplicationError>;
}
