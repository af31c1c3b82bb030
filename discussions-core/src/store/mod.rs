/*
    store - Normalized in-memory entity cache

    One insertion-ordered map per entity type, keyed by id. The store is
    owned by the session and mutated only by the sync orchestrator and the
    topic reconciler; mutation is synchronously visible to all reads.

    Removing a record never cascades: scrubbing dangling ids out of the
    session id lists is the caller's responsibility.
*/

pub mod entity_map;

pub use entity_map::{Entity, EntityMap};

use crate::model::{App, AppConfig, AppId, DiscussionTopic, Feature, FeatureId, TopicId};

impl Entity for App {
    type Id = AppId;

    fn entity_id(&self) -> &AppId {
        &self.id
    }
}

impl Entity for Feature {
    type Id = FeatureId;

    fn entity_id(&self) -> &FeatureId {
        &self.id
    }
}

impl Entity for DiscussionTopic {
    type Id = TopicId;

    fn entity_id(&self) -> &TopicId {
        &self.id
    }
}

// AppConfigs have no id of their own; they are keyed by the app they
// configure.
impl Entity for AppConfig {
    type Id = AppId;

    fn entity_id(&self) -> &AppId {
        &self.id
    }
}

/// The session's normalized entity cache
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    pub apps: EntityMap<App>,
    pub features: EntityMap<Feature>,
    pub discussion_topics: EntityMap<DiscussionTopic>,
    pub app_configs: EntityMap<AppConfig>,
}

impl EntityStore {
    pub fn new() -> Self {
        EntityStore::default()
    }
}
