/*
    test_utils - Shared test doubles and fixtures

    Fixture snapshots and in-memory collaborator implementations used by
    the unit tests and by the CLI when driving a session without a real
    backend.
*/

pub mod fixtures;
pub mod gateways;

pub use fixtures::{legacy_snapshot, lti_snapshot};
pub use gateways::{FailingGateway, RecordingNavigator, StaticGateway};
