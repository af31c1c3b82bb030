/*
    session - Explicitly-owned configuration session state

    One Session per mounted settings form: created empty, populated by the
    initial fetch, mutated by topic edits and saves, dropped on unmount.
    Nothing here persists beyond the session.

    active_app_id is the provider persisted on the server;
    selected_app_id is the provider being configured. The two diverge only
    while unconfirmed changes are pending.
*/

use crate::model::{App, AppConfig, AppId, DiscussionTopic, FeatureId, TopicId};
use crate::status::{LoadStatus, SaveStatus};
use crate::store::EntityStore;
use crate::sync::gateway::ConfigSnapshot;

/// State of one configuration session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub store: EntityStore,

    /// Provider currently persisted on the server
    pub active_app_id: Option<AppId>,

    /// Provider the user is configuring
    pub selected_app_id: Option<AppId>,

    pub app_ids: Vec<AppId>,
    pub feature_ids: Vec<FeatureId>,
    pub discussion_topic_ids: Vec<TopicId>,
    pub divide_discussion_ids: Vec<TopicId>,

    pub status: LoadStatus,
    pub save_status: SaveStatus,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Switch the provider being configured (route-driven)
    pub fn select_app(&mut self, app_id: AppId) {
        self.selected_app_id = Some(app_id);
    }

    /// Bulk-load server state into the store and the derived id lists
    ///
    /// Called only on a successful fetch or save; the server is the source
    /// of truth for everything it returns. Failures never reach this
    /// method, so the store keeps its prior snapshot on error.
    pub fn apply_snapshot(&mut self, snapshot: ConfigSnapshot) {
        let ConfigSnapshot {
            apps,
            features,
            active_app_id,
            app_config,
            discussion_topics,
            discussion_topic_ids,
            divide_discussion_ids,
        } = snapshot;

        self.app_ids = apps.iter().map(|app| app.id.clone()).collect();
        self.feature_ids = features.iter().map(|feature| feature.id.clone()).collect();

        self.store.app_configs.insert(app_config);
        self.store.apps.insert_many(apps);
        self.store.features.insert_many(features);
        self.store.discussion_topics.insert_many(discussion_topics);

        self.discussion_topic_ids = discussion_topic_ids;
        self.divide_discussion_ids = divide_discussion_ids;

        // First load selects the provider that is already active.
        if self.selected_app_id.is_none() {
            self.selected_app_id = Some(active_app_id.clone());
        }
        self.active_app_id = Some(active_app_id);
    }

    pub fn selected_app(&self) -> Option<&App> {
        self.selected_app_id
            .as_ref()
            .and_then(|id| self.store.apps.get(id))
    }

    /// Config for the selected provider; None while configuring a provider
    /// that has never been active
    pub fn selected_config(&self) -> Option<&AppConfig> {
        self.selected_app_id
            .as_ref()
            .and_then(|id| self.store.app_configs.get(id))
    }

    /// Live topic list, in `discussion_topic_ids` order
    pub fn discussion_topics(&self) -> Vec<&DiscussionTopic> {
        self.store.discussion_topics.get_many(&self.discussion_topic_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_new_session_is_empty_and_not_loaded() {
        let session = Session::new();
        assert!(session.store.apps.is_empty());
        assert_eq!(session.status, LoadStatus::NotLoaded);
        assert_eq!(session.save_status, SaveStatus::Unsaved);
        assert!(session.active_app_id.is_none());
    }

    #[test]
    fn test_apply_snapshot_populates_store_and_id_lists() {
        let mut session = Session::new();
        session.apply_snapshot(fixtures::legacy_snapshot());

        assert_eq!(session.active_app_id, Some(AppId::new("legacy")));
        assert_eq!(session.app_ids.len(), 2);
        assert_eq!(session.discussion_topic_ids, vec![TopicId::new("course")]);
        assert_eq!(
            session
                .store
                .discussion_topics
                .get(&TopicId::new("course"))
                .map(|topic| topic.name.as_str()),
            Some("General")
        );
    }

    #[test]
    fn test_first_snapshot_selects_active_app() {
        let mut session = Session::new();
        session.apply_snapshot(fixtures::legacy_snapshot());
        assert_eq!(session.selected_app_id, Some(AppId::new("legacy")));
    }

    #[test]
    fn test_snapshot_preserves_existing_selection() {
        let mut session = Session::new();
        session.select_app(AppId::new("piazza"));
        session.apply_snapshot(fixtures::legacy_snapshot());
        assert_eq!(session.selected_app_id, Some(AppId::new("piazza")));
    }

    #[test]
    fn test_selected_config_is_none_for_never_active_app() {
        let mut session = Session::new();
        session.apply_snapshot(fixtures::legacy_snapshot());
        session.select_app(AppId::new("piazza"));
        assert!(session.selected_config().is_none());
        assert!(session.selected_app().is_some());
    }

    #[test]
    fn test_reapplying_identical_snapshot_is_idempotent() {
        let mut session = Session::new();
        session.apply_snapshot(fixtures::legacy_snapshot());
        let first = session.clone();

        session.apply_snapshot(fixtures::legacy_snapshot());
        assert_eq!(session, first);
    }
}
