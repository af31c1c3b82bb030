/*
    fixtures.rs - Sample server snapshots

    Two providers: the built-in forum ("legacy") and a partial-support LTI
    tool ("piazza"), with a single server-provided course-wide topic.
*/

use crate::model::{
    App, AppConfig, AppId, DiscussionTopic, ExternalLinks, Feature, FeatureId, LegacySettings,
    LtiSettings, ProviderSettings, TopicId,
};
use crate::sync::gateway::ConfigSnapshot;

fn sample_apps() -> Vec<App> {
    vec![
        App {
            id: AppId::new("legacy"),
            has_full_support: true,
            feature_ids: vec![
                FeatureId::new("discussion-page"),
                FeatureId::new("embedded-course-sections"),
            ],
            external_links: None,
        },
        App {
            id: AppId::new("piazza"),
            has_full_support: false,
            feature_ids: vec![FeatureId::new("discussion-page")],
            external_links: Some(ExternalLinks {
                learn_more: Some("https://piazza.com/product/overview".into()),
                ..Default::default()
            }),
        },
    ]
}

fn sample_features() -> Vec<Feature> {
    vec![
        Feature {
            id: FeatureId::new("discussion-page"),
            name: Some("Discussion page".into()),
        },
        Feature {
            id: FeatureId::new("embedded-course-sections"),
            name: Some("Embedded course sections".into()),
        },
    ]
}

/// Snapshot with the built-in forum active and one course-wide topic
pub fn legacy_snapshot() -> ConfigSnapshot {
    ConfigSnapshot {
        apps: sample_apps(),
        features: sample_features(),
        active_app_id: AppId::new("legacy"),
        app_config: AppConfig::new(
            AppId::new("legacy"),
            ProviderSettings::Legacy(LegacySettings {
                blackout_dates: "[]".into(),
                ..Default::default()
            }),
        ),
        discussion_topics: vec![DiscussionTopic::new(TopicId::new("course"), "General")],
        discussion_topic_ids: vec![TopicId::new("course")],
        divide_discussion_ids: vec![],
    }
}

/// Snapshot with the LTI provider active and configured
pub fn lti_snapshot() -> ConfigSnapshot {
    ConfigSnapshot {
        apps: sample_apps(),
        features: sample_features(),
        active_app_id: AppId::new("piazza"),
        app_config: AppConfig::new(
            AppId::new("piazza"),
            ProviderSettings::Lti(LtiSettings {
                consumer_key: "client_key_123".into(),
                consumer_secret: "client_secret_123".into(),
                launch_url: "https://piazza.com/lti/launch".into(),
            }),
        ),
        discussion_topics: vec![],
        discussion_topic_ids: vec![],
        divide_discussion_ids: vec![],
    }
}
