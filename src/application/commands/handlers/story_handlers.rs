//! Story Command Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::GenerateStory;
use crate::application::error::ApplicationError;
use crate::application::ports::StoryGeneratorPort;
use crate::domain::{AnswerType, Topic};

// ============================================================================
// GenerateStory
// ============================================================================

/// GenerateStory Handler
///
/// 先校验主题，再交给注入的生成策略（LLM 或 fixture）
pub struct GenerateStoryHandler {
    generator: Arc<dyn StoryGeneratorPort>,
}

impl GenerateStoryHandler {
    pub fn new(generator: Arc<dyn StoryGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: GenerateStory) -> Result<Value, ApplicationError> {
        let topic = Topic::from_json(command.topic.as_ref())?;
        let answer_type = AnswerType::parse(command.answer_type.as_ref());

        tracing::info!(
            topic = %topic,
            answer_type = ?answer_type,
            "Generating story"
        );

        self.generator.generate(&topic, answer_type).await
    }
}
