//! Evaluation Command Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::EvaluateAnswers;
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatCompletionPort, ChatRequest, PromptStorePort};
use crate::domain::prompt::{QUESTIONS_PLACEHOLDER, STORY_PLACEHOLDER};
use crate::domain::{format_questions, PromptKind};

/// 批改答案的 system 指令
pub const EVALUATION_SYSTEM_PROMPT: &str = "You are a helpful German language teacher. \
Evaluate the answers based on the story and questions. \
Always respond in the specified JSON format.";

/// 批改时的采样温度（偏确定性）
pub const EVALUATION_TEMPERATURE: f32 = 0.3;

/// 请求格式错误提示
pub const INVALID_EVALUATION_REQUEST: &str =
    "Invalid request format. Expected { story: string, questions: Array }";

// ============================================================================
// EvaluateAnswers
// ============================================================================

/// EvaluateAnswers Handler
pub struct EvaluateAnswersHandler {
    chat: Arc<dyn ChatCompletionPort>,
    prompts: Arc<dyn PromptStorePort>,
}

impl EvaluateAnswersHandler {
    pub fn new(chat: Arc<dyn ChatCompletionPort>, prompts: Arc<dyn PromptStorePort>) -> Self {
        Self { chat, prompts }
    }

    /// 返回模型给出的批改 JSON，不做修改
    pub async fn handle(&self, command: EvaluateAnswers) -> Result<Value, ApplicationError> {
        let (story, questions) = match (command.story, command.questions) {
            (Some(story), Some(questions)) if !story.is_empty() => (story, questions),
            _ => return Err(ApplicationError::validation(INVALID_EVALUATION_REQUEST)),
        };

        let prompt = self
            .prompts
            .load(PromptKind::EvaluateAnswers)
            .await?
            .fill(STORY_PLACEHOLDER, &story)
            .fill(QUESTIONS_PLACEHOLDER, &format_questions(&questions))
            .into_string();

        tracing::debug!(
            question_count = questions.len(),
            prompt_len = prompt.len(),
            "Requesting answer evaluation"
        );

        let content = self
            .chat
            .complete(ChatRequest::new(
                EVALUATION_SYSTEM_PROMPT,
                prompt,
                EVALUATION_TEMPERATURE,
            ))
            .await?
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                ApplicationError::ExternalServiceError(
                    "No evaluation content received from OpenAI".to_string(),
                )
            })?;

        let evaluation: Value = serde_json::from_str(&content)?;

        tracing::info!(question_count = questions.len(), "Answers evaluated");

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuestionAnswer;
    use crate::test_support::{FakeChat, StaticPrompts};
    use serde_json::json;

    fn handler(chat: Arc<FakeChat>) -> EvaluateAnswersHandler {
        EvaluateAnswersHandler::new(chat, Arc::new(StaticPrompts::default()))
    }

    fn command() -> EvaluateAnswers {
        EvaluateAnswers {
            story: Some("Anna wohnt in Hamburg.".into()),
            questions: Some(vec![
                QuestionAnswer::new("Q1", Some("A1")),
                QuestionAnswer::new("Q2", None),
            ]),
        }
    }

    #[tokio::test]
    async fn test_prompt_contains_numbered_listing() {
        let chat = Arc::new(FakeChat::replying(json!({"score": 1}).to_string()));
        handler(chat.clone()).handle(command()).await.unwrap();

        let request = chat.last_request().unwrap();
        assert!(request.user.contains("Anna wohnt in Hamburg."));
        assert!(request.user.contains("1. Question: Q1\n   Answer: A1"));
        assert!(request
            .user
            .contains("2. Question: Q2\n   Answer: No answer provided"));
        assert_eq!(request.system, EVALUATION_SYSTEM_PROMPT);
        assert_eq!(request.temperature, EVALUATION_TEMPERATURE);
    }

    #[tokio::test]
    async fn test_returns_evaluation_unmodified() {
        let evaluation = json!({
            "results": [{"correct": true, "feedback": "Gut gemacht"}],
            "overall": "sehr gut"
        });
        let chat = Arc::new(FakeChat::replying(evaluation.to_string()));

        let result = handler(chat).handle(command()).await.unwrap();
        assert_eq!(result, evaluation);
    }

    #[tokio::test]
    async fn test_empty_question_list_is_accepted() {
        let chat = Arc::new(FakeChat::replying("{}".to_string()));
        let result = handler(chat)
            .handle(EvaluateAnswers {
                story: Some("Text".into()),
                questions: Some(vec![]),
            })
            .await
            .unwrap();
        assert_eq!(result, json!({}));
    }

    #[tokio::test]
    async fn test_invalid_request_shape() {
        let chat = Arc::new(FakeChat::replying("{}".to_string()));
        let handler = handler(chat.clone());

        for command in [
            EvaluateAnswers {
                story: None,
                questions: Some(vec![]),
            },
            EvaluateAnswers {
                story: Some(String::new()),
                questions: Some(vec![]),
            },
            EvaluateAnswers {
                story: Some("Text".into()),
                questions: None,
            },
        ] {
            let err = handler.handle(command).await.unwrap_err();
            assert!(err.is_client_error());
            assert_eq!(err.to_string(), INVALID_EVALUATION_REQUEST);
        }
        assert_eq!(chat.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_fails() {
        let chat = Arc::new(FakeChat::empty());
        let err = handler(chat).handle(command()).await.unwrap_err();
        assert_eq!(err.to_string(), "No evaluation content received from OpenAI");
    }

    #[tokio::test]
    async fn test_unparseable_content_fails() {
        let chat = Arc::new(FakeChat::replying("not json".to_string()));
        let err = handler(chat).handle(command()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
    }
}
