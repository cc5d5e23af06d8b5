//! Story Commands

use serde_json::Value;

use crate::domain::QuestionAnswer;

/// 生成故事命令
///
/// 字段保持请求体中的原始 JSON 值，由 handler 负责校验
#[derive(Debug, Clone, Default)]
pub struct GenerateStory {
    pub topic: Option<Value>,
    pub answer_type: Option<Value>,
}

/// 批改答案命令
#[derive(Debug, Clone, Default)]
pub struct EvaluateAnswers {
    pub story: Option<String>,
    /// `None` 表示请求中缺少数组
    pub questions: Option<Vec<QuestionAnswer>>,
}
