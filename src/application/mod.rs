//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChatCompletion、SpeechSynthesizer、PromptStore、AudioStorage、StoryGenerator）
//! - commands: 命令及处理器
//! - services: LLM 故事生成流程
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod services;

// Re-exports
pub use commands::{
    handlers::{EvaluateAnswersHandler, GenerateStoryHandler},
    EvaluateAnswers, GenerateStory,
};

pub use error::ApplicationError;

pub use ports::{
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    StoredAudio,
    // Chat completion
    ChatCompletionPort,
    ChatRequest,
    LlmError,
    // Prompt store
    PromptError,
    PromptStorePort,
    // Speech synthesizer
    SpeechSynthesizerPort,
    SynthesizedAudio,
    TtsError,
    // Story generator
    StoryGeneratorPort,
};

pub use services::LlmStoryGenerator;
