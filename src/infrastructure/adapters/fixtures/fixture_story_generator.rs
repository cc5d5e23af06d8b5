//! Fixture Story Generator - mock 模式下的故事生成器
//!
//! 始终返回固定的 JSON，不调用 LLM/TTS，也不写任何文件

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::application::ports::StoryGeneratorPort;
use crate::application::ApplicationError;
use crate::domain::{AnswerType, Topic};

/// 默认 fixture 文件名
pub const DEFAULT_FIXTURE: &str = "response.json";

/// 选择题 fixture 文件名
pub const MULTIPLE_CHOICE_FIXTURE: &str = "response_multiple_choice.json";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Fixture {path} is not valid JSON: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Fixture 配置
#[derive(Debug, Clone)]
pub struct FixtureStoryGeneratorConfig {
    /// 默认 fixture 路径
    pub default_path: PathBuf,
    /// 选择题 fixture 路径
    pub multiple_choice_path: PathBuf,
}

impl FixtureStoryGeneratorConfig {
    /// 使用目录下的标准文件名
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            default_path: dir.join(DEFAULT_FIXTURE),
            multiple_choice_path: dir.join(MULTIPLE_CHOICE_FIXTURE),
        }
    }
}

/// Fixture Story Generator
///
/// 启动时读取并解析两个 fixture，之后只返回缓存的副本
pub struct FixtureStoryGenerator {
    default_response: Value,
    multiple_choice_response: Value,
}

impl FixtureStoryGenerator {
    pub fn new(config: FixtureStoryGeneratorConfig) -> Result<Self, FixtureError> {
        let default_response = read_fixture(&config.default_path)?;
        let multiple_choice_response = read_fixture(&config.multiple_choice_path)?;

        tracing::info!(
            default = %config.default_path.display(),
            multiple_choice = %config.multiple_choice_path.display(),
            "FixtureStoryGenerator initialized"
        );

        Ok(Self {
            default_response,
            multiple_choice_response,
        })
    }

    /// 直接使用内存中的 fixture
    pub fn from_values(default_response: Value, multiple_choice_response: Value) -> Self {
        Self {
            default_response,
            multiple_choice_response,
        }
    }

    fn fixture_for(&self, answer_type: AnswerType) -> &Value {
        match answer_type {
            AnswerType::Multiple => &self.multiple_choice_response,
            AnswerType::Default => &self.default_response,
        }
    }
}

fn read_fixture(path: &Path) -> Result<Value, FixtureError> {
    let text = std::fs::read_to_string(path).map_err(|e| FixtureError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| FixtureError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[async_trait]
impl StoryGeneratorPort for FixtureStoryGenerator {
    async fn generate(
        &self,
        topic: &Topic,
        answer_type: AnswerType,
    ) -> Result<Value, ApplicationError> {
        tracing::debug!(
            topic = %topic,
            answer_type = ?answer_type,
            "FixtureStoryGenerator: returning canned response"
        );

        Ok(self.fixture_for(answer_type).clone())
    }
}
