/*
    gate - Destructive app-switch confirmation

    Switching providers discards the previous provider's configuration, so
    the first submit after a switch must be confirmed explicitly. The gate
    only tracks whether the confirmation has been shown for the current
    submit attempt; presenting the dialog and re-submitting is the host's
    job.

    The check compares app ids only. Switching back to the originally
    active provider and submitting unchanged values therefore still asks
    for confirmation. Intentionally left as-is; see DESIGN.md.
*/

use crate::model::AppId;

/// What the caller should do with a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Present the confirmation dialog and re-submit once acknowledged
    RequireConfirmation,
    /// Hand the draft to the sync orchestrator
    Proceed,
}

/// Whether a submit needs confirmation, as a pure predicate
pub fn needs_confirmation(
    active_app_id: Option<&AppId>,
    selected_app_id: Option<&AppId>,
    confirmation_shown: bool,
) -> bool {
    active_app_id != selected_app_id && !confirmation_shown
}

/// Per-form confirmation state
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmationGate {
    confirmation_shown: bool,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        ConfirmationGate::default()
    }

    /// Decide a submit attempt and advance the gate
    ///
    /// Requiring confirmation marks it as shown, so the next evaluation of
    /// the same attempt proceeds. Proceeding re-arms the gate for the next
    /// attempt.
    pub fn evaluate(
        &mut self,
        active_app_id: Option<&AppId>,
        selected_app_id: Option<&AppId>,
    ) -> GateDecision {
        if needs_confirmation(active_app_id, selected_app_id, self.confirmation_shown) {
            self.confirmation_shown = true;
            GateDecision::RequireConfirmation
        } else {
            self.confirmation_shown = false;
            GateDecision::Proceed
        }
    }

    /// The dialog was closed without saving; re-arm the gate
    pub fn dismiss(&mut self) {
        self.confirmation_shown = false;
    }

    pub fn is_confirmation_shown(&self) -> bool {
        self.confirmation_shown
    }
}
