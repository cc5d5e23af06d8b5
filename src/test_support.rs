//! 测试用的端口实现
//!
//! 所有 fake 都记录调用，便于断言"没有发生远程调用 / 文件写入"

use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Mutex;

use crate::application::ports::{
    ChatCompletionPort, ChatRequest, LlmError, PromptError, PromptStorePort,
    SpeechSynthesizerPort, StoryGeneratorPort, SynthesizedAudio, TtsError,
};
use crate::application::ApplicationError;
use crate::domain::{AnswerType, PromptKind, PromptTemplate, Topic};

/// 固定回复的对话补全
pub struct FakeChat {
    reply: Result<Option<String>, String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeChat {
    pub fn replying(content: String) -> Self {
        Self::with_reply(Ok(Some(content)))
    }

    pub fn empty() -> Self {
        Self::with_reply(Ok(None))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(message.to_string()))
    }

    fn with_reply(reply: Result<Option<String>, String>) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatCompletionPort for FakeChat {
    async fn complete(&self, request: ChatRequest) -> Result<Option<String>, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone().map_err(LlmError::Api)
    }
}

/// 返回固定字节的语音合成
#[derive(Default)]
pub struct FakeSpeech {
    texts: Mutex<Vec<String>>,
}

impl FakeSpeech {
    pub const AUDIO: &'static [u8] = b"ID3fake-mp3";

    pub fn calls(&self) -> usize {
        self.texts.lock().unwrap().len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeech {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, TtsError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(SynthesizedAudio {
            audio_data: Self::AUDIO.to_vec(),
            voice: "nova".to_string(),
        })
    }
}

/// 内存中的模板
pub struct StaticPrompts {
    story: String,
    evaluation: String,
}

impl Default for StaticPrompts {
    fn default() -> Self {
        Self {
            story: "Topic: $TOPIC\nAgain: $TOPIC".to_string(),
            evaluation: "Story:\n$STORY\n\nQuestions:\n$QUESTIONS".to_string(),
        }
    }
}

#[async_trait]
impl PromptStorePort for StaticPrompts {
    async fn load(&self, kind: PromptKind) -> Result<PromptTemplate, PromptError> {
        let text = match kind {
            PromptKind::CreateStoryAndQuestions => &self.story,
            PromptKind::EvaluateAnswers => &self.evaluation,
        };
        Ok(PromptTemplate::new(text.clone()))
    }
}

/// 记录调用参数的故事生成器
#[derive(Default)]
pub struct RecordingGenerator {
    answer_types: Mutex<Vec<AnswerType>>,
}

impl RecordingGenerator {
    pub fn calls(&self) -> usize {
        self.answer_types.lock().unwrap().len()
    }

    pub fn answer_types(&self) -> Vec<AnswerType> {
        self.answer_types.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryGeneratorPort for RecordingGenerator {
    async fn generate(
        &self,
        topic: &Topic,
        answer_type: AnswerType,
    ) -> Result<Value, ApplicationError> {
        self.answer_types.lock().unwrap().push(answer_type);
        Ok(json!({ "topic": topic.as_str() }))
    }
}

/// 目录下的文件名（排序），目录不存在时为空
pub fn audio_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
