//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use gth_data::dataset::Dataset;
use gth_data::tooltip::TooltipState;

/// Shared state for the heatmap app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the load failed
    pub error_msg: Signal<Option<String>>,
    /// Loaded dataset (None until the fetch resolves)
    pub dataset: Signal<Option<Dataset>>,
    /// State of the single shared tooltip overlay
    pub tooltip: Signal<TooltipState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dataset: Signal::new(None),
            tooltip: Signal::new(TooltipState::new()),
        }
    }
}
