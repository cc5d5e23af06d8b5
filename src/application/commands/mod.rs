//! 应用层 - 命令
//!
//! 两个用例：生成故事、批改答案

mod story_commands;

pub mod handlers;

pub use story_commands::*;
