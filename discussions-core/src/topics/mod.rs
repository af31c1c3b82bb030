/*
    topics - Discussion topic reconciliation

    The topic list is the single source of truth for three derived views:
    the ordered topic ids, the cohort-divided subset, and the name
    validation result. Every edit goes through here so the views never
    drift from the store.

    Invariant maintained by these operations:
    divide_discussion_ids is a subset of discussion_topic_ids, and every
    listed id has a record in the store.
*/

use crate::model::{DiscussionTopic, IssueKind, TopicId, ValidationIssue};
use crate::session::Session;
use std::collections::HashMap;

/// Validation state of one topic entry
///
/// The two checks are independent: an entry can be both unnamed and a
/// duplicate (two blank topics collide on the empty name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntryValidation {
    pub id: TopicId,
    pub missing_name: bool,
    pub duplicate_name: bool,
}

impl TopicEntryValidation {
    pub fn is_valid(&self) -> bool {
        !self.missing_name && !self.duplicate_name
    }

    /// Flatten into submit-blocking issues
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.missing_name {
            issues.push(ValidationIssue::topic(self.id.clone(), IssueKind::Required));
        }
        if self.duplicate_name {
            issues.push(ValidationIssue::topic(self.id.clone(), IssueKind::Duplicate));
        }
        issues
    }
}

/// Validate names across a topic list
///
/// Names are trimmed and case-folded before comparison. When a collision
/// exists, every member of the colliding group is marked, not just the
/// later occurrences. Violations are surfaced to the caller; nothing is
/// renamed or dropped to resolve them.
pub fn validate_names(topics: &[DiscussionTopic]) -> Vec<TopicEntryValidation> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for topic in topics {
        *counts.entry(topic.folded_name()).or_default() += 1;
    }

    topics
        .iter()
        .map(|topic| TopicEntryValidation {
            id: topic.id.clone(),
            missing_name: topic.name.trim().is_empty(),
            duplicate_name: counts[&topic.folded_name()] > 1,
        })
        .collect()
}

/// Validate the session's live topic list
pub fn validate_session(session: &Session) -> Vec<TopicEntryValidation> {
    let topics: Vec<DiscussionTopic> = session
        .discussion_topics()
        .into_iter()
        .cloned()
        .collect();
    validate_names(&topics)
}

/// Append a fresh empty-named topic
///
/// New topics default to divided, so the generated id lands in both
/// derived id lists.
pub fn add_topic(session: &mut Session) -> TopicId {
    let topic = DiscussionTopic::draft();
    let id = topic.id.clone();

    session.store.discussion_topics.insert(topic);
    session.discussion_topic_ids.push(id.clone());
    session.divide_discussion_ids.push(id.clone());

    tracing::debug!(topic_id = %id, "added discussion topic");
    id
}

/// Remove a topic record and scrub its id from both derived lists
pub fn delete_topic(session: &mut Session, id: &TopicId) {
    session.store.discussion_topics.remove(id);
    session.discussion_topic_ids.retain(|topic_id| topic_id != id);
    session.divide_discussion_ids.retain(|topic_id| topic_id != id);

    tracing::debug!(topic_id = %id, "deleted discussion topic");
}

/// Replace a topic's name and re-validate the whole list
pub fn rename_topic(
    session: &mut Session,
    id: &TopicId,
    name: impl Into<String>,
) -> Vec<TopicEntryValidation> {
    if session.store.discussion_topics.contains(id) {
        session
            .store
            .discussion_topics
            .insert(DiscussionTopic::new(id.clone(), name));
    }
    validate_session(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use proptest::prelude::*;

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.apply_snapshot(fixtures::legacy_snapshot());
        session
    }

    fn entry<'a>(
        validations: &'a [TopicEntryValidation],
        id: &TopicId,
    ) -> &'a TopicEntryValidation {
        validations.iter().find(|v| &v.id == id).unwrap()
    }

    #[test]
    fn test_add_topic_defaults_to_divided() {
        let mut session = loaded_session();
        let id = add_topic(&mut session);

        assert!(session.discussion_topic_ids.contains(&id));
        assert!(session.divide_discussion_ids.contains(&id));
        assert_eq!(
            session.store.discussion_topics.get(&id).unwrap().name,
            ""
        );
    }

    #[test]
    fn test_delete_topic_scrubs_both_lists() {
        let mut session = loaded_session();
        let id = add_topic(&mut session);
        delete_topic(&mut session, &id);

        assert!(!session.discussion_topic_ids.contains(&id));
        assert!(!session.divide_discussion_ids.contains(&id));
        assert!(session.store.discussion_topics.get(&id).is_none());
    }

    #[test]
    fn test_case_insensitive_collision_marks_both_entries() {
        let mut session = loaded_session();
        let id = add_topic(&mut session);
        let validations = rename_topic(&mut session, &id, "  general ");

        let course = TopicId::new("course");
        assert!(entry(&validations, &course).duplicate_name);
        assert!(entry(&validations, &id).duplicate_name);
        // the existing topic keeps a non-empty name
        assert!(!entry(&validations, &course).missing_name);
    }

    #[test]
    fn test_deleting_the_collider_clears_the_original() {
        let mut session = loaded_session();
        let id = add_topic(&mut session);
        rename_topic(&mut session, &id, "General");
        delete_topic(&mut session, &id);

        let validations = validate_session(&session);
        assert!(entry(&validations, &TopicId::new("course")).is_valid());
    }

    #[test]
    fn test_renaming_to_unique_clears_both() {
        let mut session = loaded_session();
        let id = add_topic(&mut session);
        rename_topic(&mut session, &id, "General");
        let validations = rename_topic(&mut session, &id, "Homework help");

        assert!(validations.iter().all(TopicEntryValidation::is_valid));
    }

    #[test]
    fn test_empty_name_is_required_regardless_of_uniqueness() {
        let mut session = loaded_session();
        let id = add_topic(&mut session);

        let validations = validate_session(&session);
        let added = entry(&validations, &id);
        assert!(added.missing_name);
        assert!(!added.is_valid());
    }

    #[test]
    fn test_two_blank_topics_collide_and_are_both_required() {
        let mut session = loaded_session();
        let first = add_topic(&mut session);
        let second = add_topic(&mut session);

        let validations = validate_session(&session);
        for id in [&first, &second] {
            let e = entry(&validations, id);
            assert!(e.missing_name);
            assert!(e.duplicate_name);
        }
    }

    #[test]
    fn test_rename_unknown_id_leaves_store_untouched() {
        let mut session = loaded_session();
        let before = session.store.clone();
        rename_topic(&mut session, &TopicId::new("ghost"), "Anything");
        assert_eq!(session.store, before);
    }

    proptest! {
        // After any add/delete sequence the divided set stays a subset of
        // the topic list and every listed id has a record.
        #[test]
        fn prop_divide_ids_stay_subset(ops in proptest::collection::vec(0u8..3, 0..40)) {
            let mut session = loaded_session();
            let mut added: Vec<TopicId> = Vec::new();

            for op in ops {
                match op {
                    0 => added.push(add_topic(&mut session)),
                    1 => {
                        if let Some(id) = added.pop() {
                            delete_topic(&mut session, &id);
                        }
                    }
                    _ => {
                        // deleting a server-provided topic follows the
                        // same path
                        let id = TopicId::new("course");
                        delete_topic(&mut session, &id);
                    }
                }

                for id in &session.divide_discussion_ids {
                    prop_assert!(session.discussion_topic_ids.contains(id));
                }
                for id in &session.discussion_topic_ids {
                    prop_assert!(session.store.discussion_topics.contains(id));
                }
            }
        }
    }
}
