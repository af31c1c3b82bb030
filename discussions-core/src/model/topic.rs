/*
    topic.rs - Course-wide discussion topic

    Topics are mutable by full-record replacement only; renames go through
    the topic reconciler so the derived id lists and validation state stay
    consistent.
*/

use super::types::TopicId;
use serde::{Deserialize, Serialize};

/// A course-wide discussion topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionTopic {
    pub id: TopicId,
    pub name: String,
}

impl DiscussionTopic {
    pub fn new(id: TopicId, name: impl Into<String>) -> Self {
        DiscussionTopic {
            id,
            name: name.into(),
        }
    }

    /// A freshly added topic: generated id, empty name
    pub fn draft() -> Self {
        DiscussionTopic {
            id: TopicId::generate(),
            name: String::new(),
        }
    }

    /// Name as used for uniqueness comparison: trimmed and case-folded
    pub fn folded_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_topic_starts_empty() {
        let topic = DiscussionTopic::draft();
        assert!(topic.name.is_empty());
    }

    #[test]
    fn test_folded_name_trims_and_lowercases() {
        let topic = DiscussionTopic::new(TopicId::new("t1"), "  General  ");
        assert_eq!(topic.folded_name(), "general");
    }
}
