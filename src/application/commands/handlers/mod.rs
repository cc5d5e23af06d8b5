//! Command Handlers

mod evaluation_handlers;
mod story_handlers;

pub use evaluation_handlers::{
    EvaluateAnswersHandler, EVALUATION_SYSTEM_PROMPT, EVALUATION_TEMPERATURE,
    INVALID_EVALUATION_REQUEST,
};
pub use story_handlers::GenerateStoryHandler;
