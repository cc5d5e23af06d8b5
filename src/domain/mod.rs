//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Story Context: 故事生成
//! - Evaluation Context: 答案批改
//!
//! 以及两者共享的 Prompt 模板替换规则

pub mod evaluation;
pub mod prompt;
pub mod story;

pub use evaluation::{format_questions, QuestionAnswer};
pub use prompt::{PromptKind, PromptTemplate};
pub use story::{AnswerType, StoryError, StoryResult, Topic};
