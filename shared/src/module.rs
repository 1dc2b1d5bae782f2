//! ==============================================================================
//! module.rs - remote module references and manifests
//! ==============================================================================
//!
//! a remote is an independently deployed app that exposes components.
//! the shell names one of them with a `ModuleRef` ("HeaderApp/Header"),
//! finds the remote's base url in the `RemoteRegistry`, reads the remote's
//! `remoteEntry.json` manifest and fetches the exposed fragment.
//!
//! manifest format:
//!     {"name": "HeaderApp", "exposes": {"./Header": "header.html"}}
//!
//! ==============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, ShellError};

/// file every remote serves at its base url
pub const MANIFEST_FILE: &str = "remoteEntry.json";

// ==============================================================================
// module reference
// ==============================================================================

/// names a component exposed by a remote, written `<remote>/<exposed>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleRef {
    remote: String,
    exposed: String,
}

impl ModuleRef {
    pub(crate) fn from_parts(remote: &str, exposed: &str) -> Self {
        Self {
            remote: remote.to_string(),
            exposed: exposed.to_string(),
        }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn exposed(&self) -> &str {
        &self.exposed
    }

    /// key under which a manifest lists this module
    pub fn expose_key(&self) -> String {
        format!("./{}", self.exposed)
    }
}

impl FromStr for ModuleRef {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShellError::InvalidModuleRef(s.to_string());

        if s.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (remote, exposed) = s.split_once('/').ok_or_else(invalid)?;
        if remote.is_empty() || exposed.is_empty() || exposed.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            remote: remote.to_string(),
            exposed: exposed.to_string(),
        })
    }
}

impl TryFrom<String> for ModuleRef {
    type Error = ShellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModuleRef> for String {
    fn from(module: ModuleRef) -> Self {
        module.to_string()
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.exposed)
    }
}

// ==============================================================================
// remote registry
// ==============================================================================

/// remote name -> base url of its deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteRegistry(BTreeMap<String, String>);

impl RemoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, remote: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.0.insert(remote.into(), base_url.into());
        self
    }

    pub fn base_url(&self, remote: &str) -> Result<&str, LoadError> {
        self.0
            .get(remote)
            .map(|url| url.trim_end_matches('/'))
            .ok_or_else(|| LoadError::UnknownRemote(remote.to_string()))
    }

    pub fn manifest_url(&self, module: &ModuleRef) -> Result<String, LoadError> {
        Ok(format!("{}/{}", self.base_url(module.remote())?, MANIFEST_FILE))
    }
}

// ==============================================================================
// manifest
// ==============================================================================

/// what a remote publishes about itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteManifest {
    pub name: String,
    #[serde(default)]
    pub exposes: BTreeMap<String, String>,
}

impl RemoteManifest {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::InvalidModule(e.to_string()))
    }

    /// absolute url of the fragment backing `module`
    ///
    /// relative paths are joined onto `base_url`, absolute http(s) urls
    /// pass through untouched.
    pub fn resolve(&self, base_url: &str, module: &ModuleRef) -> Result<String, LoadError> {
        if self.name != module.remote() {
            return Err(LoadError::InvalidModule(format!(
                "manifest is for `{}`, expected `{}`",
                self.name,
                module.remote()
            )));
        }

        let path = self
            .exposes
            .get(&module.expose_key())
            .ok_or_else(|| LoadError::NotExposed {
                remote: module.remote().to_string(),
                module: module.exposed().to_string(),
            })?;

        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.clone());
        }

        let path = path.trim_start_matches("./").trim_start_matches('/');
        Ok(format!("{}/{}", base_url.trim_end_matches('/'), path))
    }
}

// ==============================================================================
// loaded component
// ==============================================================================

/// default renderable export of a remote module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteComponent {
    pub module: ModuleRef,
    /// html fragment rendered in place of the fallback
    pub markup: String,
}

impl RemoteComponent {
    pub fn new(module: ModuleRef, markup: impl Into<String>) -> Self {
        Self {
            module,
            markup: markup.into(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
