//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod chat_completion;
mod prompt_store;
mod speech_synthesizer;
mod story_generator;

pub use audio_storage::{AudioStorageError, AudioStoragePort, StoredAudio};
pub use chat_completion::{ChatCompletionPort, ChatRequest, LlmError};
pub use prompt_store::{PromptError, PromptStorePort};
pub use speech_synthesizer::{SpeechSynthesizerPort, SynthesizedAudio, TtsError};
pub use story_generator::StoryGeneratorPort;
