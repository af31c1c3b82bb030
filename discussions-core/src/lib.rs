//! Course discussions configuration state core
//!
//! The client-side state behind a course-authoring discussions settings
//! page: a normalized entity store for apps, features, configs and
//! topics; load/save status machines; a topic reconciler enforcing name
//! uniqueness and cohort-division membership; a sync orchestrator
//! driving the (external) API gateway; and the confirmation gate guarding
//! destructive provider switches.
//!
//! Rendering, routing, i18n and the concrete HTTP client are the host's
//! concern and enter only through the `DiscussionsGateway` and
//! `Navigator` seams.

pub mod config;
pub mod gate;
pub mod logging;
pub mod model;
pub mod session;
pub mod status;
pub mod store;
pub mod sync;
pub mod test_utils;
pub mod topics;

pub use config::ClientConfig;
pub use gate::{ConfirmationGate, GateDecision};
pub use logging::{init_logging, LogLevel};
pub use session::Session;
pub use status::{LoadStatus, SaveStatus};
pub use store::EntityStore;
pub use sync::{DiscussionsGateway, GatewayError, Navigator, SubmitOutcome, SyncOrchestrator};
