/*
    sync - Network synchronization

    The orchestrator and the two collaborator seams it drives: the
    authenticated gateway (network) and the navigator (redirect on save
    success).
*/

pub mod gateway;
pub mod navigator;
pub mod orchestrator;

pub use gateway::{ConfigSnapshot, DiscussionsGateway, GatewayError};
pub use navigator::{Navigator, NullNavigator};
pub use orchestrator::{SubmitOutcome, SyncOrchestrator};

#[cfg(test)]
pub mod tests;
