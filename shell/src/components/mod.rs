//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod nodes;
mod shell_root;

pub use shell_root::ShellRoot;
