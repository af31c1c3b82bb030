/*
    gateway.rs - Network collaborator seam

    The real HTTP wrapper lives outside this crate; the orchestrator only
    sees this trait. Errors arrive already classified, so no response
    sniffing happens on this side of the seam.
*/

use crate::model::{App, AppConfig, AppConfigDraft, AppId, CourseId, DiscussionTopic, Feature, TopicId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures a gateway call can settle with
///
/// HTTP 403 is the sole signal for PermissionDenied; every other failure
/// mode, including timeouts and malformed responses, is a connection
/// error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Server-side configuration state, as returned by both the fetch and the
/// save endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub apps: Vec<App>,
    pub features: Vec<Feature>,
    pub active_app_id: AppId,
    pub app_config: AppConfig,
    pub discussion_topics: Vec<DiscussionTopic>,
    pub discussion_topic_ids: Vec<TopicId>,
    pub divide_discussion_ids: Vec<TopicId>,
}

/// Authenticated API client for the discussions configuration endpoints
#[async_trait]
pub trait DiscussionsGateway: Send + Sync {
    /// GET the provider list and current configuration for a course
    async fn get_apps(&self, course_id: &CourseId) -> Result<ConfigSnapshot, GatewayError>;

    /// POST a drafted configuration; the response reflects post-save state
    async fn post_app_config(
        &self,
        course_id: &CourseId,
        app_id: &AppId,
        draft: &AppConfigDraft,
    ) -> Result<ConfigSnapshot, GatewayError>;
}
