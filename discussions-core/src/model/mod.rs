/*
    model - Configuration entities

    The normalized entities held by the entity store, the provider
    configuration union, and the draft/validation types the forms work
    with. All records are immutable-by-replacement.
*/

pub mod app;
pub mod app_config;
pub mod draft;
pub mod feature;
pub mod topic;
pub mod types;
pub mod validation;

pub use app::{App, ExternalLinks};
pub use app_config::{AppConfig, LegacySettings, LtiSettings, ProviderSettings};
pub use draft::AppConfigDraft;
pub use feature::Feature;
pub use topic::DiscussionTopic;
pub use types::{AppId, CourseId, FeatureId, TopicId};
pub use validation::{IssueKind, IssueLocation, ValidationIssue};
