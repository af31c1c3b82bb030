/*
    types.rs - Common identifier types for configuration models

    Defines:
    - IDs for apps, features, discussion topics, courses

    Ids are opaque strings owned by the server, except TopicId which can
    also be generated locally for topics that have not been saved yet.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a discussion provider ("app")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        AppId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a catalog feature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        FeatureId(id.into())
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a discussion topic
///
/// Either a stable server identifier (e.g. "course") or a locally
/// generated token for topics added during the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicId(pub String);

impl TopicId {
    pub fn new(id: impl Into<String>) -> Self {
        TopicId(id.into())
    }

    pub fn generate() -> Self {
        use uuid::Uuid;
        TopicId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        CourseId(id.into())
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_generate_is_unique() {
        let a = TopicId::generate();
        let b = TopicId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AppId::new("legacy").to_string(), "legacy");
        assert_eq!(TopicId::new("course").to_string(), "course");
    }
}
