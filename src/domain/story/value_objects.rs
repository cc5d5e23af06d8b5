//! Story Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::StoryError;

/// 故事最大长度（按 UTF-16 码元计，emoji 等占两个）
pub const MAX_STORY_LEN: usize = 500;

/// 音频 URL 字段名
pub const AUDIO_URL_FIELD: &str = "audioUrl";

/// 题目类型
///
/// 只有字符串 `"multiple"` 会选择选择题，其余取值（包括缺省、非字符串）都归为默认。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnswerType {
    Multiple,
    #[default]
    Default,
}

impl AnswerType {
    pub fn parse(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("multiple") => Self::Multiple,
            _ => Self::Default,
        }
    }
}

/// 故事主题
///
/// 不变量: 非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn new(topic: Option<String>) -> Result<Self, StoryError> {
        match topic {
            Some(t) if !t.is_empty() => Ok(Self(t)),
            _ => Err(StoryError::MissingTopic),
        }
    }

    /// 从请求体中的原始值构造，非字符串视为缺失
    pub fn from_json(topic: Option<&Value>) -> Result<Self, StoryError> {
        Self::new(topic.and_then(Value::as_str).map(str::to_string))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 模型返回的故事结果
///
/// 不变量:
/// - `requestId` 是非空字符串，且可以安全地作为文件名
/// - `story` 是非空字符串，长度不超过 [`MAX_STORY_LEN`]
///
/// 其余字段原样保留。
#[derive(Debug, Clone, PartialEq)]
pub struct StoryResult {
    request_id: String,
    story: String,
    fields: Map<String, Value>,
}

impl StoryResult {
    /// 从模型的原始输出内容解析
    pub fn parse(content: Option<&str>) -> Result<Self, StoryError> {
        let content = match content {
            Some(c) if !c.is_empty() => c,
            _ => return Err(StoryError::MissingContent),
        };

        let value: Value = serde_json::from_str(content)
            .map_err(|e| StoryError::MalformedJson(e.to_string()))?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, StoryError> {
        let Value::Object(fields) = value else {
            return Err(StoryError::InvalidFormat);
        };

        let request_id = non_empty_str(&fields, "requestId")
            .filter(|id| is_safe_file_stem(id))
            .ok_or(StoryError::InvalidFormat)?
            .to_string();
        let story = non_empty_str(&fields, "story")
            .ok_or(StoryError::InvalidFormat)?
            .to_string();

        let length = story_len(&story);
        if length > MAX_STORY_LEN {
            return Err(StoryError::StoryTooLong { length });
        }

        Ok(Self {
            request_id,
            story,
            fields,
        })
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn story(&self) -> &str {
        &self.story
    }

    /// 附加音频 URL 并返回完整的响应对象（覆盖模型给出的同名字段）
    pub fn with_audio_url(self, audio_url: impl Into<String>) -> Value {
        let mut fields = self.fields;
        fields.insert(AUDIO_URL_FIELD.to_string(), Value::String(audio_url.into()));
        Value::Object(fields)
    }
}

/// 与浏览器端 `String.length` 一致的长度
pub fn story_len(story: &str) -> usize {
    story.encode_utf16().count()
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn is_safe_file_stem(id: &str) -> bool {
    id != "." && id != ".." && !id.contains(['/', '\\'])
}
