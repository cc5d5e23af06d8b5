//! Story Context - 故事生成限界上下文
//!
//! 职责:
//! - 请求参数校验（主题、题目类型）
//! - 模型输出的结构校验（requestId、story、长度上限）

mod errors;
mod value_objects;

pub use errors::StoryError;
pub use value_objects::{
    story_len, AnswerType, StoryResult, Topic, AUDIO_URL_FIELD, MAX_STORY_LEN,
};
