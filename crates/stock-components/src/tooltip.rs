//! Floating tooltip element

use leptos::prelude::*;
use stock_state::{use_tooltip, TooltipHandle};

/// The page's tooltip. Mount once, at the app root.
#[component]
pub fn Tooltip(#[prop(optional)] handle: Option<TooltipHandle>) -> impl IntoView {
    let state = handle.unwrap_or_else(use_tooltip).state();

    view! {
        <div class="tooltip" style=move || state.with(|s| s.css())>
            {move || {
                state.with(|s| {
                    s.content
                        .lines
                        .iter()
                        .map(|line| view! { <div class="tooltip-line">{line.clone()}</div> })
                        .collect_view()
                })
            }}
        </div>
    }
}
