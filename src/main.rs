//! Fabel - 德语阅读练习后端
//!
//! 启动流程：配置 → 日志 → 适配器 → 故事生成器（LLM 或 fixture）→ HTTP 服务

use std::sync::Arc;

use fabel::application::{LlmStoryGenerator, StoryGeneratorPort};
use fabel::config::{load_config, print_config};
use fabel::infrastructure::adapters::{
    FileAudioStorage, FilePromptStore, FixtureStoryGenerator, FixtureStoryGeneratorConfig,
    OpenAiClient, OpenAiClientConfig,
};
use fabel::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在时忽略
    dotenvy::dotenv().ok();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},fabel={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Fabel - German reading practice backend");
    print_config(&config);

    if config.mock.enabled && !config.openai.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set, /api/evaluate-answers will fail in mock mode");
    }

    // 音频目录 public/audios，随静态文件一起对外提供
    let audio_storage = Arc::new(
        FileAudioStorage::new(config.server.audio_dir(), config.server.audio_url_prefix()).await?,
    );

    // OpenAI 客户端同时实现对话和语音两个端口
    let openai_config = OpenAiClientConfig {
        base_url: config.openai.base_url.clone(),
        api_key: config.openai.api_key.clone().unwrap_or_default(),
        text_model: config.openai.text_model.clone(),
        speech_model: config.openai.speech_model.clone(),
        voice: config.openai.voice.clone(),
        timeout_secs: config.openai.timeout_secs,
    };
    let openai = Arc::new(OpenAiClient::new(openai_config)?);

    let prompts = Arc::new(FilePromptStore::new(&config.prompts.dir));

    let story_generator: Arc<dyn StoryGeneratorPort> = if config.mock.enabled {
        let fixtures = FixtureStoryGeneratorConfig::from_dir(&config.mock.fixtures_dir);
        Arc::new(FixtureStoryGenerator::new(fixtures)?)
    } else {
        Arc::new(LlmStoryGenerator::new(
            openai.clone(),
            openai.clone(),
            prompts.clone(),
            audio_storage,
        ))
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        config.server.host.clone(),
        config.server.port,
        config.server.public_dir.clone(),
    );
    let state = AppState::new(story_generator, openai, prompts, config.mock.enabled);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
