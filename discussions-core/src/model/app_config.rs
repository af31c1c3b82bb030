/*
    app_config.rs - Provider-specific configuration

    The settings shape varies by provider, so the config is a tagged union
    with one variant per provider family rather than a loosely-typed bag.
    An AppConfig has no identity of its own; it is addressed through the
    id of the app it configures, and exactly one is active per session.
*/

use super::types::AppId;
use serde::{Deserialize, Serialize};

/// LTI-style provider settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LtiSettings {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub launch_url: String,
}

/// Built-in ("legacy") forum settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacySettings {
    pub divide_by_cohorts: bool,
    pub allow_division_by_unit: bool,
    pub divide_course_wide_topics: bool,
    pub divide_general_topic: bool,
    pub divide_questions_for_tas_topic: bool,
    pub allow_anonymous_posts: bool,
    pub allow_anonymous_posts_peers: bool,

    /// JSON-encoded blackout date ranges; format is owned by the form layer
    pub blackout_dates: String,
}

/// Settings variants, keyed by provider family
///
/// Untagged on the wire: LTI payloads are recognized by their required
/// credential fields, everything else parses as legacy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderSettings {
    Lti(LtiSettings),
    Legacy(LegacySettings),
}

impl ProviderSettings {
    pub fn as_lti(&self) -> Option<&LtiSettings> {
        match self {
            ProviderSettings::Lti(settings) => Some(settings),
            ProviderSettings::Legacy(_) => None,
        }
    }

    pub fn as_legacy(&self) -> Option<&LegacySettings> {
        match self {
            ProviderSettings::Legacy(settings) => Some(settings),
            ProviderSettings::Lti(_) => None,
        }
    }
}

/// The provider configuration currently applied to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Id of the app this config belongs to
    pub id: AppId,

    #[serde(flatten)]
    pub settings: ProviderSettings,
}

impl AppConfig {
    pub fn new(id: AppId, settings: ProviderSettings) -> Self {
        AppConfig { id, settings }
    }
}
