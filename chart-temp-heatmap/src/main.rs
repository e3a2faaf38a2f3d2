//! Global Temperature Variance Heatmap
//!
//! Calendar heatmap of monthly global land-surface temperature variance:
//! one colored cell per year/month, year axis across the bottom, month
//! axis down the left, tooltip on hover.
//!
//! Data flow:
//! 1. On mount: fetch the FreeCodeCamp global-temperature JSON dataset.
//! 2. Decode and validate it into a `Dataset`; a failed load renders an
//!    error box instead of a chart.
//! 3. Derive `ChartScales` from the dataset's year range and render the
//!    SVG heatmap and axes from those scales.

use dioxus::prelude::*;
use gth_chart_ui::components::{
    ChartHeader, ErrorDisplay, HeatmapChart, LoadingSpinner, TooltipOverlay,
};
use gth_chart_ui::fetch;
use gth_chart_ui::state::AppState;
use gth_data::dataset::DATA_URL;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temp-heatmap-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the dataset once on mount
    use_effect(move || {
        spawn(async move {
            match fetch::fetch_dataset(DATA_URL).await {
                Ok(dataset) => {
                    let (min_year, max_year) = dataset.year_range();
                    log::info!(
                        "loaded {} monthly variance records spanning {}-{}",
                        dataset.records.len(),
                        min_year,
                        max_year
                    );
                    state.dataset.set(Some(dataset));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("dataset load failed: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                }
            }
        });
    });

    rsx! {
        div {
            id: "root",
            style: "max-width: 1240px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                if let Some(dataset) = state.dataset.read().as_ref() {
                    ChartHeader {
                        title: "Global Land-Surface Temperature Variance".to_string(),
                        subtitle: format!(
                            "Monthly deviation from the {}°C base temperature",
                            dataset.base_temperature
                        ),
                    }
                    HeatmapChart { dataset: dataset.clone() }
                    TooltipOverlay {}
                }
            }
        }
    }
}
