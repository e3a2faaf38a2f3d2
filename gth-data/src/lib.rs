pub mod axis;
pub mod cell;
pub mod color;
pub mod dataset;
pub mod scale;
pub mod tooltip;
