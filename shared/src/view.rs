//! ==============================================================================
//! view.rs - shell view model
//! ==============================================================================
//!
//! purpose:
//!     one mount of the shell: a loading boundary around the remote header
//!     and a static image beside it. renderer-agnostic; the leptos shell maps
//!     `render()` output onto dom nodes, tests inspect it directly.
//!
//! state machine (per mount):
//!     Pending -> Resolved | Failed
//!     monotonic. a fresh mount starts over at Pending.
//!
//! scheduling:
//!     the first render hands the retrieval to the injected `Spawner`, so the
//!     fetch runs on the host's executor without anyone awaiting it.
//!
//! ==============================================================================

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use tracing::{info, warn};

use crate::asset::ImageAsset;
use crate::config::{FailurePolicy, ShellConfig};
use crate::error::ShellError;
use crate::lazy::{LazyModule, LoadState};
use crate::module::RemoteComponent;
use crate::source::ModuleSource;

/// runs a detached task on the host's single-threaded executor
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// one node of the rendered shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// placeholder while the header is pending
    Fallback(String),
    Remote(RemoteComponent),
    /// shown instead of the header when retrieval failed
    ErrorIndicator(String),
    Image(ImageAsset),
}

impl RenderNode {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Fallback(text) | Self::ErrorIndicator(text) => Some(text),
            Self::Remote(component) => Some(&component.markup),
            Self::Image(_) => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

/// root element of the shell and its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    pub class: String,
    pub children: Vec<RenderNode>,
}

impl RenderTree {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.children
            .iter()
            .filter_map(RenderNode::text)
            .any(|text| text.contains(needle))
    }

    pub fn has_image(&self) -> bool {
        self.children.iter().any(RenderNode::is_image)
    }
}

pub struct ShellView {
    config: ShellConfig,
    header: LazyModule<RemoteComponent>,
    spawner: Spawner,
}

impl ShellView {
    /// mount a fresh view; nothing is fetched until the first render
    pub fn mount<S>(config: ShellConfig, source: S, spawner: Spawner) -> Self
    where
        S: ModuleSource + 'static,
    {
        let module = config.header.clone();
        info!(%module, "mounting shell view");

        let header = LazyModule::new(move || {
            info!(%module, "loading remote module");
            source.fetch(&module)
        });

        Self {
            config,
            header,
            spawner,
        }
    }

    pub fn header_state(&self) -> LoadState<RemoteComponent> {
        self.header.state()
    }

    /// render the current tree, starting the retrieval on first call
    ///
    /// with `FailurePolicy::Propagate` a failed retrieval is returned as an
    /// error instead of a tree.
    pub fn render(&self) -> Result<RenderTree, ShellError> {
        if !self.header.is_started() {
            let load = self.header.load();
            (self.spawner)(
                async move {
                    let _ = load.await;
                }
                .boxed_local(),
            );
        }

        let slot = match self.header.state() {
            LoadState::Pending => RenderNode::Fallback(self.config.fallback_text.clone()),
            LoadState::Resolved(component) => RenderNode::Remote(component),
            LoadState::Failed(err) => match self.config.on_failure {
                FailurePolicy::Indicator => {
                    warn!(module = %self.config.header, error = %err, "remote module failed, showing indicator");
                    RenderNode::ErrorIndicator(self.config.error_text.clone())
                }
                FailurePolicy::Propagate => return Err(err.into()),
            },
        };

        Ok(RenderTree {
            class: self.config.root_class.clone(),
            children: vec![slot, RenderNode::Image(self.config.logo.clone())],
        })
    }
}

impl std::fmt::Debug for ShellView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellView")
            .field("config", &self.config)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

// ==============================================================================
// tests
// ==============================================================================
