/*
    gateways.rs - In-memory collaborator implementations

    StaticGateway answers every call from a fixed snapshot, standing in
    for a server whose state the save does not change. FailingGateway
    settles every call with one chosen error. RecordingNavigator collects
    navigation targets for assertions.
*/

use crate::model::{AppConfigDraft, AppId, CourseId};
use crate::sync::gateway::{ConfigSnapshot, DiscussionsGateway, GatewayError};
use crate::sync::navigator::Navigator;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Gateway serving one fixed snapshot for both verbs
pub struct StaticGateway {
    snapshot: ConfigSnapshot,
    calls: AtomicUsize,
}

impl StaticGateway {
    pub fn new(snapshot: ConfigSnapshot) -> Self {
        StaticGateway {
            snapshot,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of gateway calls answered so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscussionsGateway for StaticGateway {
    async fn get_apps(&self, _course_id: &CourseId) -> Result<ConfigSnapshot, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.clone())
    }

    async fn post_app_config(
        &self,
        _course_id: &CourseId,
        _app_id: &AppId,
        _draft: &AppConfigDraft,
    ) -> Result<ConfigSnapshot, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.clone())
    }
}

/// Gateway that settles every call with the same error
pub struct FailingGateway {
    error: GatewayError,
}

impl FailingGateway {
    pub fn new(error: GatewayError) -> Self {
        FailingGateway { error }
    }

    pub fn denied() -> Self {
        FailingGateway::new(GatewayError::PermissionDenied)
    }

    pub fn disconnected() -> Self {
        FailingGateway::new(GatewayError::Connection("connection refused".into()))
    }
}

#[async_trait]
impl DiscussionsGateway for FailingGateway {
    async fn get_apps(&self, _course_id: &CourseId) -> Result<ConfigSnapshot, GatewayError> {
        Err(self.error.clone())
    }

    async fn post_app_config(
        &self,
        _course_id: &CourseId,
        _app_id: &AppId,
        _draft: &AppConfigDraft,
    ) -> Result<ConfigSnapshot, GatewayError> {
        Err(self.error.clone())
    }
}

/// Navigator that records every target it is handed
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        RecordingNavigator::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("navigator lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths
            .lock()
            .expect("navigator lock poisoned")
            .push(path.to_string());
    }
}
