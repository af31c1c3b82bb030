/*
    orchestrator.rs - Fetch/save coordination

    Drives the gateway against the session: statuses move first, the store
    is refreshed only from successful responses, and the host is told
    where to navigate after a save.

    Nothing here is cancellable. A call that has been issued always
    settles and writes its result into the session, even if a newer call
    started in the meantime (last-response-wins). Callers serialize
    operations, e.g. by disabling submit while saving.
*/

use super::gateway::DiscussionsGateway;
use super::navigator::Navigator;
use crate::gate::{ConfirmationGate, GateDecision};
use crate::model::{AppConfigDraft, AppId, CourseId, ValidationIssue};
use crate::session::Session;
use crate::status::{LoadStatus, SaveStatus};
use std::sync::Arc;

/// Result of a gated submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent
    ValidationFailed(Vec<ValidationIssue>),
    /// The app switch needs explicit confirmation; re-submit once the
    /// user acknowledges
    ConfirmationRequired,
    /// The save was attempted; consult `Session::save_status` for how it
    /// settled
    Submitted,
}

/// Coordinates network fetch/save against the session state
pub struct SyncOrchestrator {
    gateway: Arc<dyn DiscussionsGateway>,
    navigator: Arc<dyn Navigator>,
}

impl SyncOrchestrator {
    pub fn new(gateway: Arc<dyn DiscussionsGateway>, navigator: Arc<dyn Navigator>) -> Self {
        SyncOrchestrator { gateway, navigator }
    }

    /// Load the provider list and current configuration for a course
    pub async fn fetch_apps(&self, session: &mut Session, course_id: &CourseId) {
        session.status = LoadStatus::Loading;
        tracing::debug!(course_id = %course_id, "fetching discussion apps");

        match self.gateway.get_apps(course_id).await {
            Ok(snapshot) => {
                session.apply_snapshot(snapshot);
                session.status = LoadStatus::Loaded;
                tracing::info!(course_id = %course_id, "discussion apps loaded");
            }
            Err(error) => {
                session.status = LoadStatus::from_failure(&error);
                tracing::warn!(course_id = %course_id, %error, "fetching discussion apps failed");
            }
        }
    }

    /// Persist a drafted configuration for the given app
    ///
    /// On success the store is refreshed from the response (the server is
    /// the source of truth post-save) and the host is navigated to
    /// `success_path` exactly once. A permission failure revokes the load
    /// machine too: a 403 on save means edit rights went away mid-session.
    pub async fn save_app_config(
        &self,
        session: &mut Session,
        course_id: &CourseId,
        app_id: &AppId,
        draft: &AppConfigDraft,
        success_path: &str,
    ) {
        session.save_status = SaveStatus::Saving;
        tracing::debug!(course_id = %course_id, app_id = %app_id, "saving app config");

        match self.gateway.post_app_config(course_id, app_id, draft).await {
            Ok(snapshot) => {
                session.apply_snapshot(snapshot);
                session.save_status = SaveStatus::Saved;
                tracing::info!(course_id = %course_id, app_id = %app_id, "app config saved");
                self.navigator.navigate(success_path);
            }
            Err(error) => {
                session.save_status = SaveStatus::from_failure(&error);
                if session.save_status == SaveStatus::Denied {
                    // hide the whole settings interface as well
                    session.status = LoadStatus::Denied;
                }
                tracing::warn!(course_id = %course_id, app_id = %app_id, %error, "saving app config failed");
            }
        }
    }

    /// The submit flow behind the form's save button: validate, consult
    /// the confirmation gate, then save for the selected app
    pub async fn submit(
        &self,
        session: &mut Session,
        gate: &mut ConfirmationGate,
        course_id: &CourseId,
        draft: &AppConfigDraft,
        success_path: &str,
    ) -> SubmitOutcome {
        let issues = draft.validate();
        if !issues.is_empty() {
            tracing::debug!(issue_count = issues.len(), "submit blocked by validation");
            return SubmitOutcome::ValidationFailed(issues);
        }

        // No form exists without a selection; treat it like any other
        // missing required value.
        let Some(app_id) = session.selected_app_id.clone() else {
            return SubmitOutcome::ValidationFailed(vec![ValidationIssue::required_field("appId")]);
        };

        match gate.evaluate(session.active_app_id.as_ref(), Some(&app_id)) {
            GateDecision::RequireConfirmation => {
                tracing::debug!(app_id = %app_id, "app switch needs confirmation");
                SubmitOutcome::ConfirmationRequired
            }
            GateDecision::Proceed => {
                self.save_app_config(session, course_id, &app_id, draft, success_path)
                    .await;
                SubmitOutcome::Submitted
            }
        }
    }
}
