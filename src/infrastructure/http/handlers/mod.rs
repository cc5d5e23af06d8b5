//! HTTP Handlers

mod evaluation;
mod ping;
mod story;

pub use evaluation::*;
pub use ping::*;
pub use story::*;
