use crate::dataset::Dataset;

/// Fixed pixel geometry of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Layout {
    pub const DEFAULT: Layout = Layout {
        width: 1200.0,
        height: 600.0,
        padding: 60.0,
    };

    /// Horizontal extent of the plot area, excluding padding on both sides.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Vertical extent of the plot area, excluding padding on both sides.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linear scale from years to horizontal pixel positions.
///
/// The domain upper bound is `max_year + 1` so the final year's column
/// lands fully inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    pub min_year: i32,
    pub max_year: i32,
    range_start: f64,
    range_end: f64,
}

impl YearScale {
    pub fn new(min_year: i32, max_year: i32, layout: &Layout) -> Self {
        Self {
            min_year,
            max_year,
            range_start: layout.padding,
            range_end: layout.width - layout.padding,
        }
    }

    /// Domain as `[min_year, max_year + 1]`.
    pub fn domain(&self) -> (f64, f64) {
        (self.min_year as f64, self.max_year as f64 + 1.0)
    }

    /// Map a (possibly fractional) year to a pixel x position.
    pub fn position(&self, year: f64) -> f64 {
        let (d0, d1) = self.domain();
        self.range_start + (year - d0) / (d1 - d0) * (self.range_end - self.range_start)
    }

    /// Number of year columns across the plot. Clamped to at least 1 so a
    /// single-year dataset renders as one full-width column rather than
    /// dividing by zero.
    pub fn year_span(&self) -> i32 {
        (self.max_year - self.min_year).max(1)
    }
}

/// Vertical scale dividing the plot into 12 equal month bands,
/// January first, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScale {
    top: f64,
    band_height: f64,
}

impl MonthScale {
    pub fn new(layout: &Layout) -> Self {
        Self {
            top: layout.padding,
            band_height: layout.plot_height() / 12.0,
        }
    }

    /// Pixel y of the top edge of a zero-based month band.
    pub fn band_start(&self, month_index: u32) -> f64 {
        self.top + month_index as f64 * self.band_height
    }

    /// Height of every band.
    pub fn band_height(&self) -> f64 {
        self.band_height
    }
}

/// The derived scale pair for a loaded dataset. Computed once after load,
/// never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub year: YearScale,
    pub month: MonthScale,
    pub layout: Layout,
}

impl ChartScales {
    /// Derive both scales from a validated dataset's year range.
    pub fn from_dataset(dataset: &Dataset, layout: Layout) -> Self {
        let (min_year, max_year) = dataset.year_range();
        Self {
            year: YearScale::new(min_year, max_year, &layout),
            month: MonthScale::new(&layout),
            layout,
        }
    }

    /// Width of one year column in pixels.
    pub fn cell_width(&self) -> f64 {
        self.layout.plot_width() / self.year.year_span() as f64
    }
}
