//! Shared Dioxus pieces for the global temperature heatmap app.
//!
//! This crate provides:
//! - `fetch`: browser-side fetch of the upstream JSON dataset
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: the SVG heatmap, axes, tooltip, and page chrome

pub mod components;
pub mod fetch;
pub mod state;
