//! The single shared tooltip overlay.

use dioxus::prelude::*;

use crate::state::AppState;

/// Overlay div with `id="tooltip"`, driven entirely by the tooltip signal.
/// Cell enter/leave handlers mutate the signal; this component only reads it.
#[component]
pub fn TooltipOverlay() -> Element {
    let state = use_context::<AppState>();
    let tip = state.tooltip.read();
    let visibility = if tip.visible { "visible" } else { "hidden" };

    rsx! {
        div {
            id: "tooltip",
            "data-year": "{tip.year}",
            style: "position: fixed; top: 16px; right: 16px; padding: 8px 12px; background: rgba(0, 0, 0, 0.8); color: #fff; font-size: 13px; border-radius: 4px; pointer-events: none; visibility: {visibility};",
            "{tip.text}"
        }
    }
}
