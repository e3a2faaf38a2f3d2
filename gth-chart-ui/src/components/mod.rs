//! Reusable Dioxus RSX components for the heatmap app.

mod chart_header;
mod error_display;
mod heatmap;
mod loading_spinner;
mod tooltip;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heatmap::HeatmapChart;
pub use loading_spinner::LoadingSpinner;
pub use tooltip::TooltipOverlay;
