//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 兼容的扁平环境变量（OPENAI_API_KEY、TEXT_MODEL、VOICE、PORT、USE_MOCK_DATA）
//! 2. 带前缀的环境变量（`FABEL_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 扁平环境变量 → 配置键
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "openai.api_key"),
    ("TEXT_MODEL", "openai.text_model"),
    ("VOICE", "openai.voice"),
    ("PORT", "server.port"),
];

/// Mock 开关变量，只有值为 "1" 时启用
const MOCK_ENV_KEY: &str = "USE_MOCK_DATA";

/// 加载应用配置
///
/// # 环境变量示例
/// - `OPENAI_API_KEY=sk-...`
/// - `PORT=8080`
/// - `USE_MOCK_DATA=1`
/// - `FABEL_OPENAI__BASE_URL=http://localhost:11434/v1`
/// - `FABEL_SERVER__PUBLIC_DIR=/srv/public`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// 加载配置，扁平环境变量通过 `lookup` 读取
pub(crate) fn load_config_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3001)?
        .set_default("server.public_dir", "public")?
        .set_default("openai.base_url", "https://api.openai.com/v1")?
        .set_default("openai.text_model", "gpt-3.5-turbo")?
        .set_default("openai.speech_model", "tts-1")?
        .set_default("openai.voice", "nova")?
        .set_default("openai.timeout_secs", 120)?
        .set_default("prompts.dir", "prompts")?
        .set_default("mock.enabled", false)?
        .set_default("mock.fixtures_dir", "mockdata")?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    for name in CONFIG_FILE_NAMES {
        builder = builder.add_source(File::with_name(name).required(false));
    }

    // 3. 带前缀的环境变量，例如 FABEL_OPENAI__VOICE=alloy
    builder = builder.add_source(
        Environment::with_prefix("FABEL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 扁平环境变量（最高优先级）
    builder = apply_legacy_env(builder, &lookup)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 空字符串视为未设置
fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: &F,
) -> Result<ConfigBuilder<DefaultState>, ConfigCrateError>
where
    F: Fn(&str) -> Option<String>,
{
    for (env_key, config_key) in LEGACY_ENV_KEYS {
        let value = lookup(env_key).filter(|v| !v.is_empty());
        builder = builder.set_override_option(*config_key, value)?;
    }

    if let Some(flag) = lookup(MOCK_ENV_KEY) {
        builder = builder.set_override("mock.enabled", flag == "1")?;
    }

    Ok(builder)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.openai.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "OpenAI base URL cannot be empty".to_string(),
        ));
    }

    if !config.mock.enabled && !config.openai.has_api_key() {
        return Err(ConfigError::ValidationError(
            "OPENAI_API_KEY is required unless USE_MOCK_DATA=1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Directory: {:?}", config.server.public_dir);
    tracing::info!("Prompts Directory: {:?}", config.prompts.dir);
    tracing::info!("OpenAI Base URL: {}", config.openai.base_url);
    tracing::info!("OpenAI API Key: {}", if config.openai.has_api_key() { "set" } else { "not set" });
    tracing::info!("Text Model: {}", config.openai.text_model);
    tracing::info!("Speech Model: {} (voice: {})", config.openai.speech_model, config.openai.voice);
    tracing::info!("Mock Mode: {}", config.mock.enabled);
    if config.mock.enabled {
        tracing::info!("Fixtures Directory: {:?}", config.mock.fixtures_dir);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_legacy_env_keys() {
        let config = load_config_with(env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("TEXT_MODEL", "gpt-4o-mini"),
            ("VOICE", "alloy"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai.text_model, "gpt-4o-mini");
        assert_eq!(config.openai.voice, "alloy");
        assert_eq!(config.server.port, 8080);
        assert!(!config.mock.enabled);
    }

    #[test]
    fn test_empty_legacy_values_fall_back_to_defaults() {
        let config = load_config_with(env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("TEXT_MODEL", ""),
            ("PORT", ""),
        ]))
        .unwrap();

        assert_eq!(config.openai.text_model, "gpt-3.5-turbo");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_mock_flag_requires_literal_one() {
        let config = load_config_with(env(&[("USE_MOCK_DATA", "1")])).unwrap();
        assert!(config.mock.enabled);

        for value in ["true", "yes", "0"] {
            let config =
                load_config_with(env(&[("USE_MOCK_DATA", value), ("OPENAI_API_KEY", "sk-test")]))
                    .unwrap();
            assert!(!config.mock.enabled, "USE_MOCK_DATA={}", value);
        }
    }

    #[test]
    fn test_api_key_required_without_mock() {
        let result = load_config_with(env(&[]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.openai.api_key = Some("sk-test".into());
        assert!(validate_config(&config).is_ok());

        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.mock.enabled = true;
        config.openai.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }
}
