//! dom for each node of the shell's render tree

use leptos::prelude::*;
use shared::RenderNode;

pub fn node_view(node: RenderNode) -> AnyView {
    match node {
        RenderNode::Fallback(text) => view! { <div class="remote-fallback">{text}</div> }.into_any(),
        RenderNode::Remote(component) => {
            view! { <div class="remote-module" inner_html=component.markup></div> }.into_any()
        }
        RenderNode::ErrorIndicator(text) => {
            view! { <div class="remote-error" role="alert">{text}</div> }.into_any()
        }
        RenderNode::Image(asset) => {
            view! { <img class=asset.class.clone() src=asset.src() alt=asset.alt.clone() /> }.into_any()
        }
    }
}
