/*
    draft.rs - Unsaved form values

    A draft is the full set of values a settings form submits. Validation
    runs over the draft before any network traffic; save is never attempted
    while issues remain.
*/

use super::app_config::{LegacySettings, LtiSettings};
use super::topic::DiscussionTopic;
use super::types::TopicId;
use super::validation::ValidationIssue;
use crate::topics;
use serde::{Deserialize, Serialize};

/// Values submitted from a provider settings form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppConfigDraft {
    Lti(LtiSettings),
    Legacy {
        #[serde(flatten)]
        settings: LegacySettings,
        #[serde(rename = "discussionTopics")]
        discussion_topics: Vec<DiscussionTopic>,
        #[serde(rename = "divideDiscussionIds")]
        divide_discussion_ids: Vec<TopicId>,
    },
}

impl AppConfigDraft {
    /// Run every client-side check and collect the failures
    ///
    /// LTI drafts require all three credential fields; legacy drafts
    /// delegate topic-name checking to the reconciler's validator.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        match self {
            AppConfigDraft::Lti(settings) => validate_lti(settings),
            AppConfigDraft::Legacy {
                discussion_topics, ..
            } => topics::validate_names(discussion_topics)
                .iter()
                .flat_map(|entry| entry.issues())
                .collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn validate_lti(settings: &LtiSettings) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if settings.consumer_key.trim().is_empty() {
        issues.push(ValidationIssue::required_field("consumerKey"));
    }
    if settings.consumer_secret.trim().is_empty() {
        issues.push(ValidationIssue::required_field("consumerSecret"));
    }
    if settings.launch_url.trim().is_empty() {
        issues.push(ValidationIssue::required_field("launchUrl"));
    }
    issues
}
