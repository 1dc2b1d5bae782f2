//! ==============================================================================
//! lib.rs - Micro-frontend Shell
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm shell that lazily loads a remotely hosted header module
//!     and renders it above a static image.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - remote modules resolved via remoteEntry.json manifests over fetch
//!     - config embedded in the host page, handed to the shell root
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet};
use shared::ShellConfig;
use wasm_bindgen::prelude::*;

mod boot;
mod components;
mod remote;

use components::ShellRoot;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = boot::load_config();
    mount_to_body(move || view! { <App config=config /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(config: ShellConfig) -> impl IntoView {
    provide_meta_context();

    let stylesheet = config.stylesheet.clone();

    view! {
        {stylesheet.map(|href| view! { <Stylesheet href=href /> })}
        <ShellRoot config=config />
    }
}
