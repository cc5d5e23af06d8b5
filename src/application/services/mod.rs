//! Application Services - 由多个端口组合而成的用例实现

mod llm_story_generator;

pub use llm_story_generator::{LlmStoryGenerator, STORY_SYSTEM_PROMPT, STORY_TEMPERATURE};
