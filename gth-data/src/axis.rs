use crate::dataset::month_name;
use crate::scale::{MonthScale, YearScale};

/// A tick on an axis: pixel position along the axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Step size producing round tick values (multiples of 1, 2, or 5 times a
/// power of ten) for roughly `count` ticks across the span.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let mut power = 10f64.powf(step.log10().floor());
    let error = step / power;
    if error >= 50f64.sqrt() {
        power *= 10.0;
    } else if error >= 10f64.sqrt() {
        power *= 5.0;
    } else if error >= 2f64.sqrt() {
        power *= 2.0;
    }
    power
}

/// Round tick values covering `[start, stop]`, endpoints included only
/// when they fall on a step multiple.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(stop > start) {
        return vec![start];
    }
    let step = tick_step(start, stop, count);
    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Ticks for the horizontal year axis: integer years formatted without
/// separators, positioned through the year scale.
pub fn year_ticks(scale: &YearScale, count: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain();
    linear_ticks(d0, d1, count)
        .into_iter()
        .filter(|value| value.fract() == 0.0)
        .map(|value| Tick {
            position: scale.position(value),
            label: format!("{}", value as i64),
        })
        .collect()
}

/// Ticks for the vertical month axis: one per calendar month at the top
/// of its band, labeled with the full month name.
pub fn month_ticks(scale: &MonthScale) -> Vec<Tick> {
    (0..12)
        .map(|month_index| Tick {
            position: scale.band_start(month_index),
            label: month_name(month_index),
        })
        .collect()
}
