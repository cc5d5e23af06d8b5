//! Data Transfer Objects
//!
//! 请求体字段全部可选，缺失字段由 handler 统一报 400

use serde::Deserialize;
use serde_json::Value;

use crate::application::{EvaluateAnswers, GenerateStory};
use crate::domain::QuestionAnswer;

// ============================================================================
// Story DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    #[serde(default)]
    pub topic: Option<Value>,
    #[serde(default)]
    pub answer_type: Option<Value>,
}

impl From<GenerateStoryRequest> for GenerateStory {
    fn from(req: GenerateStoryRequest) -> Self {
        Self {
            topic: req.topic,
            answer_type: req.answer_type,
        }
    }
}

// ============================================================================
// Evaluation DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct EvaluateAnswersRequest {
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionAnswer>>,
}

impl From<EvaluateAnswersRequest> for EvaluateAnswers {
    fn from(req: EvaluateAnswersRequest) -> Self {
        Self {
            story: req.story,
            questions: req.questions,
        }
    }
}
