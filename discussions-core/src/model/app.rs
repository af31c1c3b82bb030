/*
    app.rs - Discussion provider definition

    An App is a selectable discussion provider (the built-in forum or a
    third-party LTI tool). Apps are created once per session from the app
    list response and are never deleted while the session lives.
*/

use super::types::{AppId, FeatureId};
use serde::{Deserialize, Serialize};

/// Links a provider publishes alongside its definition
///
/// All fields are optional; providers without documentation simply omit
/// them and the form hides the corresponding section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalLinks {
    pub learn_more: Option<String>,
    pub configuration: Option<String>,
    pub general: Option<String>,
    pub accessibility: Option<String>,
    pub contact_email: Option<String>,
}

/// A pluggable discussion provider definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Provider id, e.g. "legacy" or "piazza"
    pub id: AppId,

    /// Whether every catalog feature is supported by this provider
    pub has_full_support: bool,

    /// Catalog features this provider supports
    pub feature_ids: Vec<FeatureId>,

    /// Documentation and support links, if the provider publishes any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_links: Option<ExternalLinks>,
}

impl App {
    pub fn supports(&self, feature_id: &FeatureId) -> bool {
        self.feature_ids.contains(feature_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> App {
        App {
            id: AppId::new("piazza"),
            has_full_support: false,
            feature_ids: vec![FeatureId::new("discussion-page")],
            external_links: None,
        }
    }

    #[test]
    fn test_supports_known_feature() {
        let app = sample_app();
        assert!(app.supports(&FeatureId::new("discussion-page")));
        assert!(!app.supports(&FeatureId::new("wcag-2.1")));
    }

    #[test]
    fn test_app_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_app()).unwrap();
        assert!(json.get("hasFullSupport").is_some());
        assert!(json.get("featureIds").is_some());
        // absent links are omitted entirely
        assert!(json.get("externalLinks").is_none());
    }

    #[test]
    fn test_external_links_partial_deserialization() {
        let links: ExternalLinks =
            serde_json::from_str(r#"{"learnMore": "https://example.com/docs"}"#).unwrap();
        assert_eq!(links.learn_more.as_deref(), Some("https://example.com/docs"));
        assert_eq!(links.contact_email, None);
    }
}
