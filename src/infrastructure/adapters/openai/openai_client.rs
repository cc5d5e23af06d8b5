//! OpenAI Client - 调用 OpenAI 兼容的 HTTP API
//!
//! 同时实现 ChatCompletionPort 与 SpeechSynthesizerPort
//!
//! 外部 API:
//! POST {base_url}/chat/completions   Request: JSON  Response: JSON
//! POST {base_url}/audio/speech       Request: JSON  Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    ChatCompletionPort, ChatRequest, LlmError, SpeechSynthesizerPort, SynthesizedAudio, TtsError,
};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// 第一个候选的文本内容
    fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key
    pub api_key: String,
    /// 对话模型
    pub text_model: String,
    /// 语音模型
    pub speech_model: String,
    /// 音色
    pub voice: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            text_model: "gpt-3.5-turbo".to_string(),
            speech_model: "tts-1".to_string(),
            voice: "nova".to_string(),
            timeout_secs: 120,
        }
    }
}

impl OpenAiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// OpenAI 客户端
pub struct OpenAiClient {
    client: Client,
    config: OpenAiClientConfig,
}

impl OpenAiClient {
    /// 创建新的客户端
    pub fn new(config: OpenAiClientConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn chat_url(&self) -> String {
        self.endpoint("chat/completions")
    }

    fn speech_url(&self) -> String {
        self.endpoint("audio/speech")
    }

    fn chat_body<'a>(&'a self, request: &'a ChatRequest) -> ChatCompletionBody<'a> {
        ChatCompletionBody {
            model: &self.config.text_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: request.temperature,
        }
    }
}

/// 把非 2xx 响应转换为错误消息，优先使用 API 返回的 error.message
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.error.message)
        .unwrap_or(body);
    format!("{} {}", status.as_u16(), message)
}

#[async_trait]
impl ChatCompletionPort for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<Option<String>, LlmError> {
        let body = self.chat_body(&request);

        tracing::debug!(
            url = %self.chat_url(),
            model = %self.config.text_model,
            temperature = request.temperature,
            prompt_len = request.user.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else if e.is_connect() {
                    LlmError::NetworkError(format!("Cannot connect to OpenAI: {}", e))
                } else {
                    LlmError::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(LlmError::Api(error_message(response).await));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let content = completion.into_first_content();

        tracing::info!(
            model = %self.config.text_model,
            content_len = content.as_ref().map_or(0, String::len),
            "Chat completion finished"
        );

        Ok(content)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for OpenAiClient {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, TtsError> {
        let body = SpeechBody {
            model: &self.config.speech_model,
            voice: &self.config.voice,
            input: text,
        };

        tracing::debug!(
            url = %self.speech_url(),
            model = %self.config.speech_model,
            voice = %self.config.voice,
            text_len = text.len(),
            "Sending speech request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to OpenAI: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TtsError::ServiceError(error_message(response).await));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice = %self.config.voice,
            audio_size = audio_data.len(),
            "Speech synthesis completed"
        );

        Ok(SynthesizedAudio {
            audio_data,
            voice: self.config.voice.clone(),
        })
    }
}
