//! Fixture Adapter - mock 模式的固定响应

mod fixture_story_generator;

pub use fixture_story_generator::{
    FixtureError, FixtureStoryGenerator, FixtureStoryGeneratorConfig, DEFAULT_FIXTURE,
    MULTIPLE_CHOICE_FIXTURE,
};
