//! error types for the shell

use thiserror::Error;

/// failure while retrieving a remote module.
///
/// cloneable because the outcome of one retrieval is shared by every
/// observer of the same mount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// no base url registered for the remote
    #[error("unknown remote `{0}`")]
    UnknownRemote(String),

    /// the remote's manifest does not expose the requested module
    #[error("remote `{remote}` does not expose `{module}`")]
    NotExposed { remote: String, module: String },

    /// transport failure or non-success status
    #[error("network error: {0}")]
    Network(String),

    /// manifest or module body could not be understood
    #[error("invalid module: {0}")]
    InvalidModule(String),
}

/// top-level shell errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("invalid module reference `{0}`")]
    InvalidModuleRef(String),

    #[error("invalid shell config: {0}")]
    Config(String),

    /// retrieval failed and no error boundary is configured
    #[error("remote module failed to load: {0}")]
    RemoteLoad(#[from] LoadError),
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
