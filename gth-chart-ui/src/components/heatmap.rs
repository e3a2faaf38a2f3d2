//! The calendar heatmap: one SVG rect per year/month record, plus the
//! year and month axes.
//!
//! Scales and cell geometry come from `gth-data` as plain values; this
//! module only binds them to SVG elements and wires the tooltip handlers.

use dioxus::prelude::*;
use gth_data::axis::{month_ticks, year_ticks};
use gth_data::cell::{cells, Cell};
use gth_data::dataset::Dataset;
use gth_data::scale::{ChartScales, Layout};

use crate::state::AppState;

/// Target tick count for the year axis.
const YEAR_TICK_COUNT: usize = 10;

const AXIS_COLOR: &str = "#333";

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapChartProps {
    pub dataset: Dataset,
}

/// Fixed-size SVG heatmap of the full dataset.
#[component]
pub fn HeatmapChart(props: HeatmapChartProps) -> Element {
    let layout = Layout::DEFAULT;
    let scales = ChartScales::from_dataset(&props.dataset, layout);
    let chart_cells = cells(&props.dataset, &scales);
    let x_ticks = year_ticks(&scales.year, YEAR_TICK_COUNT);
    let y_ticks = month_ticks(&scales.month);

    let axis_left = layout.padding;
    let axis_right = layout.width - layout.padding;
    let axis_top = layout.padding;
    let axis_bottom = layout.height - layout.padding;

    rsx! {
        svg {
            width: "{layout.width}",
            height: "{layout.height}",

            for cell in chart_cells {
                HeatmapCell { key: "{cell.year}-{cell.month_index}", cell }
            }

            g {
                id: "x-axis",
                transform: "translate(0, {axis_bottom})",
                line {
                    x1: "{axis_left}",
                    x2: "{axis_right}",
                    y1: "0",
                    y2: "0",
                    stroke: AXIS_COLOR,
                }
                for tick in x_ticks {
                    g {
                        transform: "translate({tick.position}, 0)",
                        line { y1: "0", y2: "6", stroke: AXIS_COLOR }
                        text {
                            y: "20",
                            fill: AXIS_COLOR,
                            "text-anchor": "middle",
                            "font-size": "12",
                            "{tick.label}"
                        }
                    }
                }
            }

            g {
                id: "y-axis",
                transform: "translate({axis_left}, 0)",
                line {
                    x1: "0",
                    x2: "0",
                    y1: "{axis_top}",
                    y2: "{axis_bottom}",
                    stroke: AXIS_COLOR,
                }
                for tick in y_ticks {
                    g {
                        transform: "translate(0, {tick.position})",
                        line { x1: "-6", x2: "0", stroke: AXIS_COLOR }
                        text {
                            x: "-9",
                            dy: "0.32em",
                            fill: AXIS_COLOR,
                            "text-anchor": "end",
                            "font-size": "12",
                            "{tick.label}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HeatmapCellProps {
    cell: Cell,
}

/// A single cell rect. Enter/leave handlers drive the shared tooltip
/// signal; leave only hides if this cell is still the one shown.
#[component]
fn HeatmapCell(props: HeatmapCellProps) -> Element {
    let mut state = use_context::<AppState>();

    let cell = props.cell;
    let key = cell.key();
    let year = cell.year;
    let text = cell.tooltip_text();
    let fill = cell.fill();

    rsx! {
        rect {
            class: "cell",
            x: "{cell.x}",
            y: "{cell.y}",
            width: "{cell.width}",
            height: "{cell.height}",
            fill: fill,
            "data-year": "{cell.year}",
            "data-month": "{cell.month_index}",
            "data-temp": "{cell.temp}",
            onmouseenter: move |_| state.tooltip.write().show(key, year, text.clone()),
            onmouseleave: move |_| state.tooltip.write().hide(key),
        }
    }
}
