/*
    status - Load and save lifecycle machines

    Two independent machines per configuration session. Neither machine
    deduplicates in-flight operations: a second fetch or save issued while
    one is pending will have its result written unconditionally
    (last-response-wins). Callers serialize operations, typically by
    disabling the submit control while a machine is in flight.
*/

use crate::sync::gateway::GatewayError;
use serde::Serialize;
use std::fmt;

/// Lifecycle of the initial configuration fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
    /// The server answered 403; the settings interface is inaccessible
    Denied,
}

impl LoadStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded)
    }

    /// Terminal status for a failed fetch: 403 is the sole signal that
    /// distinguishes denial from an ordinary connection failure
    pub fn from_failure(error: &GatewayError) -> Self {
        match error {
            GatewayError::PermissionDenied => LoadStatus::Denied,
            GatewayError::Connection(_) => LoadStatus::Failed,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadStatus::NotLoaded => "NOT_LOADED",
            LoadStatus::Loading => "LOADING",
            LoadStatus::Loaded => "LOADED",
            LoadStatus::Failed => "FAILED",
            LoadStatus::Denied => "DENIED",
        };
        write!(f, "{}", label)
    }
}

/// Lifecycle of a configuration save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaveStatus {
    #[default]
    Unsaved,
    Saving,
    Saved,
    Failed,
    /// The server answered 403 on save; edit rights were revoked
    /// mid-session, which also revokes the load machine
    Denied,
}

impl SaveStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }

    pub fn from_failure(error: &GatewayError) -> Self {
        match error {
            GatewayError::PermissionDenied => SaveStatus::Denied,
            GatewayError::Connection(_) => SaveStatus::Failed,
        }
    }
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaveStatus::Unsaved => "UNSAVED",
            SaveStatus::Saving => "SAVING",
            SaveStatus::Saved => "SAVED",
            SaveStatus::Failed => "FAILED",
            SaveStatus::Denied => "DENIED",
        };
        write!(f, "{}", label)
    }
}
