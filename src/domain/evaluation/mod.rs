//! Evaluation Context - 答案批改限界上下文
//!
//! 职责:
//! - 题目/答案列表的文本格式

mod value_objects;

pub use value_objects::{format_questions, QuestionAnswer, NO_ANSWER};
