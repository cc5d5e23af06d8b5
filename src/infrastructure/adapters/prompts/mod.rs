//! Prompt Adapter - 模板文件读取

mod file_prompt_store;

pub use file_prompt_store::FilePromptStore;
