//! Speech Synthesizer Port - TTS 抽象
//!
//! 把故事文本合成为 mp3 音频，模型和音色由具体实现的配置决定

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 原始音频数据（mp3）
    pub audio_data: Vec<u8>,
    /// 使用的音色
    pub voice: String,
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 合成语音
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, TtsError>;
}
