use crate::color::VarianceBucket;
use crate::dataset::{month_name, Dataset, VarianceRecord};
use crate::scale::ChartScales;

/// Identity of a cell, used to pair tooltip enter/leave events.
pub type CellKey = (i32, u32);

/// One rendered rectangle: a single year/month variance record projected
/// through the scales. Derived at render time, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub year: i32,
    /// Zero-based month index, exposed as `data-month`.
    pub month_index: u32,
    pub variance: f64,
    /// Absolute temperature, base plus variance, exposed as `data-temp`.
    pub temp: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bucket: VarianceBucket,
}

impl Cell {
    pub fn from_record(record: &VarianceRecord, base_temperature: f64, scales: &ChartScales) -> Self {
        let month_index = record.month_index();
        Self {
            year: record.year,
            month_index,
            variance: record.variance,
            temp: base_temperature + record.variance,
            x: scales.year.position(record.year as f64),
            y: scales.month.band_start(month_index),
            width: scales.cell_width(),
            height: scales.month.band_height(),
            bucket: VarianceBucket::for_variance(record.variance),
        }
    }

    pub fn key(&self) -> CellKey {
        (self.year, self.month_index)
    }

    pub fn fill(&self) -> &'static str {
        self.bucket.hex()
    }

    /// Hover text: `"<year> <month name> - <temp> (<variance>)"`.
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} {} - {} ({})",
            self.year,
            month_name(self.month_index),
            self.temp,
            self.variance
        )
    }
}

/// Project every record of a dataset into cells.
pub fn cells(dataset: &Dataset, scales: &ChartScales) -> Vec<Cell> {
    dataset
        .records
        .iter()
        .map(|record| Cell::from_record(record, dataset.base_temperature, scales))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::VarianceRecord;
    use crate::scale::Layout;

    fn sample_dataset() -> Dataset {
        Dataset {
            base_temperature: 8.0,
            records: vec![
                VarianceRecord {
                    year: 1900,
                    month: 1,
                    variance: 0.5,
                },
                VarianceRecord {
                    year: 2000,
                    month: 6,
                    variance: -2.0,
                },
            ],
        }
    }

    #[test]
    fn test_two_record_scenario() {
        let dataset = sample_dataset();
        let scales = ChartScales::from_dataset(&dataset, Layout::DEFAULT);
        let cells = cells(&dataset, &scales);

        assert_eq!(cells.len(), 2);
        assert_eq!(scales.year.domain(), (1900.0, 2001.0));

        assert_eq!(cells[0].year, 1900);
        assert_eq!(cells[0].month_index, 0);
        assert!((cells[0].temp - 8.5).abs() < 1e-9);
        assert_eq!(cells[0].bucket, VarianceBucket::Amber);

        assert_eq!(cells[1].year, 2000);
        assert_eq!(cells[1].month_index, 5);
        assert!((cells[1].temp - 6.0).abs() < 1e-9);
        assert_eq!(cells[1].bucket, VarianceBucket::ColdBlue);
    }

    #[test]
    fn test_cell_geometry_follows_scales() {
        let dataset = sample_dataset();
        let layout = Layout::DEFAULT;
        let scales = ChartScales::from_dataset(&dataset, layout);
        let cell = Cell::from_record(&dataset.records[0], dataset.base_temperature, &scales);

        assert!((cell.x - scales.year.position(1900.0)).abs() < 1e-9);
        assert!((cell.y - layout.padding).abs() < 1e-9);
        assert!((cell.width - layout.plot_width() / 100.0).abs() < 1e-9);
        assert!((cell.height - layout.plot_height() / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_tooltip_text_format() {
        let dataset = sample_dataset();
        let scales = ChartScales::from_dataset(&dataset, Layout::DEFAULT);
        let cell = Cell::from_record(&dataset.records[0], dataset.base_temperature, &scales);
        assert_eq!(cell.tooltip_text(), "1900 January - 8.5 (0.5)");

        let cell = Cell::from_record(&dataset.records[1], dataset.base_temperature, &scales);
        assert_eq!(cell.tooltip_text(), "2000 June - 6 (-2)");
    }
}
