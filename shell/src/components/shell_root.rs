//! Shell root
//!
//! owns one `ShellView` per mount and redraws it whenever the header
//! retrieval settles. a failed retrieval under the `propagate` policy is
//! thrown from here as a `ShellError`.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use shared::{ShellConfig, ShellView, Spawner};
use tracing::debug;

use super::nodes::node_view;
use crate::remote;

#[component]
pub fn ShellRoot(config: ShellConfig) -> impl IntoView {
    let settled = ArcTrigger::new();
    let notify = settled.clone();
    let mounted_at = js_sys::Date::now();

    // retrieval runs on leptos' local executor; redraw once it lands
    let spawner: Spawner = Rc::new(move |load: LocalBoxFuture<'static, ()>| {
        let notify = notify.clone();
        leptos::task::spawn_local(async move {
            load.await;
            debug!(elapsed_ms = js_sys::Date::now() - mounted_at, "remote module settled");
            notify.notify();
        });
    });

    let source = remote::http_source(config.remotes.clone());
    let shell = StoredValue::new_local(ShellView::mount(config, source, spawner));

    move || {
        settled.track();
        shell.with_value(ShellView::render).map(|tree| {
            view! {
                <div class=tree.class>
                    {tree.children.into_iter().map(node_view).collect_view()}
                </div>
            }
        })
    }
}
