//! Prompt 模板
//!
//! 模板是包含字面占位符的纯文本文件，每个占位符只替换第一次出现的位置。
//! 不存在的占位符静默忽略，重复出现的占位符只替换第一个。

use serde::{Deserialize, Serialize};

/// 主题占位符
pub const TOPIC_PLACEHOLDER: &str = "$TOPIC";

/// 故事占位符
pub const STORY_PLACEHOLDER: &str = "$STORY";

/// 问题列表占位符
pub const QUESTIONS_PLACEHOLDER: &str = "$QUESTIONS";

/// 模板种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptKind {
    /// 生成故事和理解题
    CreateStoryAndQuestions,
    /// 批改答案
    EvaluateAnswers,
}

impl PromptKind {
    /// 模板文件名（相对 prompts 目录）
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::CreateStoryAndQuestions => "createStoryAndQuestions.txt",
            Self::EvaluateAnswers => "evaluateAnswers.txt",
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// 替换第一次出现的占位符
///
/// 替换内容按字面插入，不解析任何特殊序列。
pub fn substitute_once(template: &str, placeholder: &str, value: &str) -> String {
    template.replacen(placeholder, value, 1)
}

/// 已加载的模板文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 依次替换占位符，返回新的模板
    pub fn fill(self, placeholder: &str, value: &str) -> Self {
        Self(substitute_once(&self.0, placeholder, value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
