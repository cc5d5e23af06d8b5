//! File Prompt Store - 从 prompts 目录读取模板

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::application::ports::{PromptError, PromptStorePort};
use crate::domain::{PromptKind, PromptTemplate};

/// 文件系统模板仓库
///
/// 每次 `load` 都重新读文件，修改模板无需重启
pub struct FilePromptStore {
    dir: PathBuf,
}

impl FilePromptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, kind: PromptKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

#[async_trait]
impl PromptStorePort for FilePromptStore {
    async fn load(&self, kind: PromptKind) -> Result<PromptTemplate, PromptError> {
        let path = self.path_of(kind);

        let text = fs::read_to_string(&path)
            .await
            .map_err(|e| PromptError::ReadFailed {
                name: kind.file_name(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), len = text.len(), "Prompt template loaded");

        Ok(PromptTemplate::new(text))
    }
}
