//! ==============================================================================
//! config.rs - injected shell configuration
//! ==============================================================================
//!
//! everything the shell view needs from its environment: which remote module
//! to load, where remotes live, the static image, the stylesheet and what to
//! do when the remote fails. the host page embeds it as json; every field is
//! optional and falls back to the defaults below.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

use crate::asset::ImageAsset;
use crate::error::ShellError;
use crate::module::{ModuleRef, RemoteRegistry};

pub const DEFAULT_HEADER_REMOTE_URL: &str = "http://localhost:3001";

/// what happens to the header slot when retrieval fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// error boundary around the loading boundary; show `error_text`
    #[default]
    Indicator,
    /// no boundary: `ShellView::render` returns the error and the whole
    /// shell fails to render. in the browser the error is thrown from the
    /// shell root; without an enclosing `<ErrorBoundary>` in the host app
    /// leptos drops it and the shell renders nothing, image included.
    Propagate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// class of the root element, targeted by the stylesheet
    pub root_class: String,
    pub fallback_text: String,
    pub error_text: String,
    pub header: ModuleRef,
    pub remotes: RemoteRegistry,
    pub logo: ImageAsset,
    pub on_failure: FailurePolicy,
    /// external stylesheet url, if any
    pub stylesheet: Option<String>,
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            root_class: "App".to_string(),
            fallback_text: "Loading...".to_string(),
            error_text: "Header unavailable".to_string(),
            header: ModuleRef::from_parts("HeaderApp", "Header"),
            remotes: RemoteRegistry::new().register("HeaderApp", DEFAULT_HEADER_REMOTE_URL),
            logo: ImageAsset::default(),
            on_failure: FailurePolicy::default(),
            stylesheet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.root_class, "App");
        assert_eq!(config.fallback_text, "Loading...");
        assert_eq!(config.header.to_string(), "HeaderApp/Header");
        assert_eq!(config.on_failure, FailurePolicy::Indicator);
        assert_eq!(
            config.remotes.base_url("HeaderApp"),
            Ok(DEFAULT_HEADER_REMOTE_URL)
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ShellConfig::from_json("{}").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ShellConfig::from_json(
            r#"{
                "header": "NavApp/Menu",
                "remotes": {"NavApp": "https://nav.example.com"},
                "on_failure": "propagate",
                "stylesheet": "/App.css"
            }"#,
        )
        .unwrap();

        assert_eq!(config.header.remote(), "NavApp");
        assert_eq!(config.remotes.base_url("NavApp"), Ok("https://nav.example.com"));
        assert_eq!(config.on_failure, FailurePolicy::Propagate);
        assert_eq!(config.stylesheet.as_deref(), Some("/App.css"));
        assert_eq!(config.fallback_text, "Loading...");
    }

    #[test]
    fn test_bad_module_ref_is_config_error() {
        let err = ShellConfig::from_json(r#"{"header": "not-a-module"}"#).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }
}
