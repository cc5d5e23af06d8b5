//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fixtures;
pub mod openai;
pub mod prompts;
pub mod storage;

pub use fixtures::*;
pub use openai::*;
pub use prompts::*;
pub use storage::*;
