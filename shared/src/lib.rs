//! ==============================================================================
//! lib.rs - shell core: deferred remote modules and the shell view
//! ==============================================================================
//!
//! purpose:
//!     renderer-agnostic core of the micro-frontend shell. names remote
//!     modules, resolves them through remote manifests, loads them lazily
//!     (at most once per mount) and models the shell view's render tree.
//!
//! relationships:
//!     - used by: shell (leptos csr app rendering this model in the browser)
//!     - external: remotes serving `remoteEntry.json` + exposed fragments
//!
//! design rationale:
//!     everything that decides *what* the shell shows lives here and is
//!     testable natively. the wasm crate only decides *how* to draw it and
//!     how to speak http.
//!
//! ==============================================================================

pub mod asset;
pub mod config;
pub mod error;
pub mod lazy;
pub mod module;
pub mod source;
pub mod view;

#[cfg(test)]
mod testing;

pub use asset::{ImageAsset, ImageFormat, ImageTransform};
pub use config::{FailurePolicy, ShellConfig};
pub use error::{LoadError, ShellError};
pub use lazy::{LazyModule, LoadFuture, LoadState};
pub use module::{ModuleRef, RemoteComponent, RemoteManifest, RemoteRegistry};
pub use source::{ManifestSource, ModuleSource, TextFetcher};
pub use view::{RenderNode, RenderTree, ShellView, Spawner};
