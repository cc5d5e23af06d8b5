//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("No content received from OpenAI")]
    MissingContent,

    #[error("{0}")]
    MalformedJson(String),

    #[error("Invalid response format from OpenAI")]
    InvalidFormat,

    #[error("Story is too long")]
    StoryTooLong { length: usize },
}
