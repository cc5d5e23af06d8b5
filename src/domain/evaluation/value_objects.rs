//! Evaluation Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 缺少答案时的占位文本
pub const NO_ANSWER: &str = "No answer provided";

/// 一道题及学习者的答案
///
/// 反序列化是宽松的：任何 JSON 值都可以作为一项，字段类型不对也不会拒绝整个请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: Option<String>,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answer: Option<&str>) -> Self {
        Self {
            question: question.into(),
            answer: answer.map(str::to_string),
        }
    }

    /// 答案文本，空答案视为未作答
    pub fn answer_or_default(&self) -> &str {
        self.answer
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(NO_ANSWER)
    }
}

impl From<Value> for QuestionAnswer {
    fn from(value: Value) -> Self {
        Self {
            question: value.get("question").and_then(text_of).unwrap_or_default(),
            answer: value.get("answer").and_then(text_of),
        }
    }
}

/// 字符串原样返回，其他标量转为文本，null 视为缺失
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// 生成编号的题目/答案列表（从 1 开始，条目之间空一行）
///
/// ```text
/// 1. Question: Q1
///    Answer: A1
///
/// 2. Question: Q2
///    Answer: No answer provided
/// ```
pub fn format_questions(questions: &[QuestionAnswer]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            format!(
                "{}. Question: {}\n   Answer: {}",
                i + 1,
                q.question,
                q.answer_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
