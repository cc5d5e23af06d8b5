//! LLM Story Generator
//!
//! 模板 → 对话补全 → 结构校验 → 语音合成 → 写入音频文件
//!
//! 任何一步失败都直接返回错误，已写入的文件不会回滚

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStoragePort, ChatCompletionPort, ChatRequest, PromptStorePort, SpeechSynthesizerPort,
    StoryGeneratorPort,
};
use crate::domain::prompt::TOPIC_PLACEHOLDER;
use crate::domain::story::story_len;
use crate::domain::{AnswerType, PromptKind, StoryResult, Topic};

/// 生成故事的 system 指令
pub const STORY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates German learning materials.";

/// 生成故事时的采样温度（偏多样性）
pub const STORY_TEMPERATURE: f32 = 0.7;

pub struct LlmStoryGenerator {
    chat: Arc<dyn ChatCompletionPort>,
    speech: Arc<dyn SpeechSynthesizerPort>,
    prompts: Arc<dyn PromptStorePort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl LlmStoryGenerator {
    pub fn new(
        chat: Arc<dyn ChatCompletionPort>,
        speech: Arc<dyn SpeechSynthesizerPort>,
        prompts: Arc<dyn PromptStorePort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            chat,
            speech,
            prompts,
            audio_storage,
        }
    }
}

#[async_trait]
impl StoryGeneratorPort for LlmStoryGenerator {
    async fn generate(
        &self,
        topic: &Topic,
        _answer_type: AnswerType,
    ) -> Result<Value, ApplicationError> {
        let prompt = self
            .prompts
            .load(PromptKind::CreateStoryAndQuestions)
            .await?
            .fill(TOPIC_PLACEHOLDER, topic.as_str())
            .into_string();

        let content = self
            .chat
            .complete(ChatRequest::new(
                STORY_SYSTEM_PROMPT,
                prompt,
                STORY_TEMPERATURE,
            ))
            .await?;

        let result = StoryResult::parse(content.as_deref())?;

        tracing::debug!(
            request_id = %result.request_id(),
            story_len = story_len(result.story()),
            "Story received, synthesizing audio"
        );

        let audio = self.speech.synthesize(result.story()).await?;
        let stored = self
            .audio_storage
            .save_audio(result.request_id(), &audio.audio_data)
            .await?;

        tracing::info!(
            request_id = %result.request_id(),
            voice = %audio.voice,
            audio_size = audio.audio_data.len(),
            path = %stored.path.display(),
            "Story audio saved"
        );

        Ok(result.with_audio_url(stored.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FileAudioStorage;
    use crate::test_support::{audio_files, FakeChat, FakeSpeech, StaticPrompts};
    use serde_json::json;
    use tempfile::tempdir;

    struct Fixture {
        chat: Arc<FakeChat>,
        speech: Arc<FakeSpeech>,
        generator: LlmStoryGenerator,
        _dir: tempfile::TempDir,
        audio_dir: std::path::PathBuf,
    }

    async fn fixture(chat: FakeChat) -> Fixture {
        let dir = tempdir().unwrap();
        let audio_dir = dir.path().join("audios");
        let storage = FileAudioStorage::new(&audio_dir, "/audios").await.unwrap();
        let chat = Arc::new(chat);
        let speech = Arc::new(FakeSpeech::default());
        let generator = LlmStoryGenerator::new(
            chat.clone(),
            speech.clone(),
            Arc::new(StaticPrompts::default()),
            Arc::new(storage),
        );
        Fixture {
            chat,
            speech,
            generator,
            _dir: dir,
            audio_dir,
        }
    }

    fn topic() -> Topic {
        Topic::new(Some("Weihnachten".into())).unwrap()
    }

    #[tokio::test]
    async fn test_success_writes_one_file_and_sets_audio_url() {
        let content = json!({
            "requestId": "story-42",
            "story": "Es war einmal ein Weihnachtsbaum.",
            "questions": ["Was war einmal?"]
        });
        let f = fixture(FakeChat::replying(content.to_string())).await;

        let value = f.generator.generate(&topic(), AnswerType::Default).await.unwrap();

        assert_eq!(value["audioUrl"], "/audios/story-42.mp3");
        assert_eq!(value["questions"], json!(["Was war einmal?"]));
        assert_eq!(audio_files(&f.audio_dir), vec!["story-42.mp3".to_string()]);
        assert_eq!(
            std::fs::read(f.audio_dir.join("story-42.mp3")).unwrap(),
            FakeSpeech::AUDIO
        );
        assert_eq!(f.speech.texts(), vec!["Es war einmal ein Weihnachtsbaum.".to_string()]);
    }

    #[tokio::test]
    async fn test_prompt_and_request_parameters() {
        let content = json!({"requestId": "r", "story": "s"});
        let f = fixture(FakeChat::replying(content.to_string())).await;

        f.generator.generate(&topic(), AnswerType::Default).await.unwrap();

        let request = f.chat.last_request().unwrap();
        assert_eq!(request.system, STORY_SYSTEM_PROMPT);
        assert_eq!(request.temperature, STORY_TEMPERATURE);
        // StaticPrompts 模板里 $TOPIC 出现两次，只替换第一个
        assert!(request.user.starts_with("Topic: Weihnachten"));
        assert!(request.user.ends_with("Again: $TOPIC"));
    }

    #[tokio::test]
    async fn test_too_long_story_skips_speech_and_write() {
        let content = json!({"requestId": "long", "story": "x".repeat(501)});
        let f = fixture(FakeChat::replying(content.to_string())).await;

        let err = f
            .generator
            .generate(&topic(), AnswerType::Default)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Story is too long");
        assert_eq!(f.speech.calls(), 0);
        assert!(audio_files(&f.audio_dir).is_empty());
    }

    #[tokio::test]
    async fn test_missing_request_id_skips_write() {
        let content = json!({"story": "Kurz."});
        let f = fixture(FakeChat::replying(content.to_string())).await;

        let err = f
            .generator
            .generate(&topic(), AnswerType::Default)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid response format from OpenAI");
        assert_eq!(f.speech.calls(), 0);
        assert!(audio_files(&f.audio_dir).is_empty());
    }

    #[tokio::test]
    async fn test_missing_content() {
        let f = fixture(FakeChat::empty()).await;
        let err = f
            .generator
            .generate(&topic(), AnswerType::Default)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No content received from OpenAI");
    }

    #[tokio::test]
    async fn test_chat_failure_is_external_error() {
        let f = fixture(FakeChat::failing("Incorrect API key provided")).await;
        let err = f
            .generator
            .generate(&topic(), AnswerType::Default)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }
}
