//! Audio Storage Port - 出站端口
//!
//! 定义音频文件存储的抽象接口。文件只创建一次，不更新、不清理。

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// 已保存的音频
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAudio {
    /// 磁盘路径
    pub path: PathBuf,
    /// 对外访问的相对 URL
    pub url: String,
}

/// Audio Storage Port - 出站端口
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 音频文件路径（`<audio_dir>/<request_id>.mp3`）
    fn audio_path(&self, request_id: &str) -> PathBuf;

    /// 音频的相对 URL（`/audios/<request_id>.mp3`）
    fn audio_url(&self, request_id: &str) -> String;

    /// 保存音频数据，同名文件直接覆盖
    async fn save_audio(
        &self,
        request_id: &str,
        data: &[u8],
    ) -> Result<StoredAudio, AudioStorageError>;
}
