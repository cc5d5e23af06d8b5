//! Application State
//!
//! 所有依赖在启动时构造一次并注入，handler 之间没有共享的可变状态

use std::sync::Arc;

use crate::application::{
    ChatCompletionPort, EvaluateAnswersHandler, GenerateStoryHandler, PromptStorePort,
    StoryGeneratorPort,
};

/// 应用状态
pub struct AppState {
    /// 故事生成器是否为 fixture 实现
    pub mock_mode: bool,

    // ========== Command Handlers ==========
    pub generate_story_handler: GenerateStoryHandler,
    pub evaluate_answers_handler: EvaluateAnswersHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `story_generator` 决定故事接口走 LLM 还是 fixture；批改接口总是使用 `chat`
    pub fn new(
        story_generator: Arc<dyn StoryGeneratorPort>,
        chat: Arc<dyn ChatCompletionPort>,
        prompts: Arc<dyn PromptStorePort>,
        mock_mode: bool,
    ) -> Self {
        Self {
            mock_mode,
            generate_story_handler: GenerateStoryHandler::new(story_generator),
            evaluate_answers_handler: EvaluateAnswersHandler::new(chat, prompts),
        }
    }
}
