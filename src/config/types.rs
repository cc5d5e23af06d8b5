//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 生成音频所在的 public 子目录，同时也是 URL 前缀
pub const AUDIO_SUBDIR: &str = "audios";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenAI 配置
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// 模板配置
    #[serde(default)]
    pub prompts: PromptsConfig,

    /// Mock 模式配置
    #[serde(default)]
    pub mock: MockConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件根目录
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 生成音频的存储目录
    pub fn audio_dir(&self) -> PathBuf {
        self.public_dir.join(AUDIO_SUBDIR)
    }

    /// 生成音频的 URL 前缀
    pub fn audio_url_prefix(&self) -> String {
        format!("/{}", AUDIO_SUBDIR)
    }
}

/// OpenAI 配置
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API Key，非 mock 模式必填
    #[serde(default)]
    pub api_key: Option<String>,

    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 对话模型
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// 语音模型
    #[serde(default = "default_speech_model")]
    pub speech_model: String,

    /// 音色
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_text_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_speech_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "nova".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            speech_model: default_speech_model(),
            voice: default_voice(),
            timeout_secs: default_timeout(),
        }
    }
}

impl OpenAiConfig {
    /// 是否配置了非空的 API Key
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// 模板配置
#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    /// 模板目录
    #[serde(default = "default_prompts_dir")]
    pub dir: PathBuf,
}

fn default_prompts_dir() -> PathBuf {
    PathBuf::from("prompts")
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: default_prompts_dir(),
        }
    }
}

/// Mock 模式配置
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// 故事接口是否返回 fixture
    #[serde(default)]
    pub enabled: bool,

    /// fixture 目录
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("mockdata")
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            fixtures_dir: default_fixtures_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
