//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait
//!
//! 文件布局: `<audio_dir>/<request_id>.mp3`，通过静态服务以 `<url_prefix>/<request_id>.mp3` 访问

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort, StoredAudio};

/// 音频文件扩展名
const AUDIO_EXTENSION: &str = "mp3";

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储目录
    audio_dir: PathBuf,
    /// 对外 URL 前缀
    url_prefix: String,
}

impl FileAudioStorage {
    /// 创建新的文件存储，目录不存在时递归创建
    pub async fn new(
        audio_dir: impl AsRef<Path>,
        url_prefix: impl Into<String>,
    ) -> Result<Self, AudioStorageError> {
        let audio_dir = audio_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&audio_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();

        Ok(Self {
            audio_dir,
            url_prefix,
        })
    }

    /// 获取存储目录
    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    fn file_name(request_id: &str) -> String {
        format!("{}.{}", request_id, AUDIO_EXTENSION)
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn audio_path(&self, request_id: &str) -> PathBuf {
        self.audio_dir.join(Self::file_name(request_id))
    }

    fn audio_url(&self, request_id: &str) -> String {
        format!("{}/{}", self.url_prefix, Self::file_name(request_id))
    }

    async fn save_audio(
        &self,
        request_id: &str,
        data: &[u8],
    ) -> Result<StoredAudio, AudioStorageError> {
        let path = self.audio_path(request_id);

        fs::write(&path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            "Saved audio: request_id={}, size={} bytes",
            request_id,
            data.len()
        );

        Ok(StoredAudio {
            path,
            url: self.audio_url(request_id),
        })
    }
}
