//! OpenAI Adapter - 对话补全与语音合成

mod openai_client;

pub use openai_client::{OpenAiClient, OpenAiClientConfig};
