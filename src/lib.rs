//! Fabel - 德语阅读练习后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story: 主题、题型、故事结果校验
//! - Evaluation: 问答列表格式化
//! - Prompt: 模板与占位符替换
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ChatCompletion, SpeechSynthesizer, PromptStore, AudioStorage, StoryGenerator）
//! - Commands: 命令及处理器
//! - Services: LLM + TTS 故事生成流程
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + 静态文件
//! - Adapters: OpenAI 客户端、模板文件、音频文件、mock fixture

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub mod test_support;

pub use config::{load_config, AppConfig};
