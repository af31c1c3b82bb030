/*
    Gated submit tests

    Covers:
    1. Validation failures block submission before the gate
    2. A provider switch needs confirmation, then saves on re-submit
    3. Submitting the active provider saves immediately
*/

use crate::gate::ConfirmationGate;
use crate::model::{AppConfigDraft, AppId, CourseId, IssueKind, LegacySettings, LtiSettings};
use crate::session::Session;
use crate::status::SaveStatus;
use crate::sync::orchestrator::{SubmitOutcome, SyncOrchestrator};
use crate::test_utils::{fixtures, RecordingNavigator, StaticGateway};
use crate::topics;
use std::sync::Arc;

const SUCCESS_PATH: &str = "/course/pages-and-resources";

fn course() -> CourseId {
    CourseId::new("course-v1:Test+Conf+2026")
}

fn harness() -> (SyncOrchestrator, Arc<RecordingNavigator>, Session) {
    let navigator = Arc::new(RecordingNavigator::new());
    let orchestrator = SyncOrchestrator::new(
        Arc::new(StaticGateway::new(fixtures::lti_snapshot())),
        navigator.clone(),
    );
    let mut session = Session::new();
    session.apply_snapshot(fixtures::legacy_snapshot());
    (orchestrator, navigator, session)
}

fn complete_lti_draft() -> AppConfigDraft {
    AppConfigDraft::Lti(LtiSettings {
        consumer_key: "key".into(),
        consumer_secret: "secret".into(),
        launch_url: "https://piazza.com/lti/launch".into(),
    })
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_the_gateway() {
    let (orchestrator, navigator, mut session) = harness();
    let mut gate = ConfirmationGate::new();
    let draft = AppConfigDraft::Lti(LtiSettings::default());

    let outcome = orchestrator
        .submit(&mut session, &mut gate, &course(), &draft, SUCCESS_PATH)
        .await;

    match outcome {
        SubmitOutcome::ValidationFailed(issues) => {
            assert_eq!(issues.len(), 3);
            assert!(issues.iter().all(|issue| issue.kind == IssueKind::Required));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(session.save_status, SaveStatus::Unsaved);
    assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn test_app_switch_requires_confirmation_then_saves() {
    let (orchestrator, navigator, mut session) = harness();
    let mut gate = ConfirmationGate::new();
    session.select_app(AppId::new("piazza"));
    let draft = complete_lti_draft();

    let first = orchestrator
        .submit(&mut session, &mut gate, &course(), &draft, SUCCESS_PATH)
        .await;
    assert_eq!(first, SubmitOutcome::ConfirmationRequired);
    assert_eq!(session.save_status, SaveStatus::Unsaved);

    // the host showed the dialog; the user acknowledged and re-submitted
    let second = orchestrator
        .submit(&mut session, &mut gate, &course(), &draft, SUCCESS_PATH)
        .await;
    assert_eq!(second, SubmitOutcome::Submitted);
    assert_eq!(session.save_status, SaveStatus::Saved);
    assert_eq!(navigator.paths(), vec![SUCCESS_PATH.to_string()]);
}

#[tokio::test]
async fn test_active_provider_saves_without_confirmation() {
    let navigator = Arc::new(RecordingNavigator::new());
    let orchestrator = SyncOrchestrator::new(
        Arc::new(StaticGateway::new(fixtures::legacy_snapshot())),
        navigator.clone(),
    );
    let mut session = Session::new();
    session.apply_snapshot(fixtures::legacy_snapshot());
    let mut gate = ConfirmationGate::new();

    let draft = AppConfigDraft::Legacy {
        settings: LegacySettings::default(),
        discussion_topics: session.discussion_topics().into_iter().cloned().collect(),
        divide_discussion_ids: session.divide_discussion_ids.clone(),
    };

    let outcome = orchestrator
        .submit(&mut session, &mut gate, &course(), &draft, SUCCESS_PATH)
        .await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(session.save_status, SaveStatus::Saved);
}

#[tokio::test]
async fn test_legacy_draft_with_duplicate_topics_is_blocked() {
    let (orchestrator, _, mut session) = harness();
    let mut gate = ConfirmationGate::new();

    let added = topics::add_topic(&mut session);
    topics::rename_topic(&mut session, &added, "general");

    let draft = AppConfigDraft::Legacy {
        settings: LegacySettings::default(),
        discussion_topics: session.discussion_topics().into_iter().cloned().collect(),
        divide_discussion_ids: session.divide_discussion_ids.clone(),
    };

    let outcome = orchestrator
        .submit(&mut session, &mut gate, &course(), &draft, SUCCESS_PATH)
        .await;

    match outcome {
        SubmitOutcome::ValidationFailed(issues) => {
            // both colliding entries are reported
            assert_eq!(
                issues
                    .iter()
                    .filter(|issue| issue.kind == IssueKind::Duplicate)
                    .count(),
                2
            );
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}
