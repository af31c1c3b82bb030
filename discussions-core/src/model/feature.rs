/*
    feature.rs - Capability catalog entry

    Features describe what a discussion provider can do (e.g. a
    discussion page, embedded course sections). The catalog is static
    per response; apps reference features by id.
*/

use super::types::FeatureId;
use serde::{Deserialize, Serialize};

/// Static catalog entry describing a capability providers may support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: FeatureId,

    /// Human-readable label, when the server sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
