use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Source of the global temperature dataset.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// One month's deviation from the base temperature, in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    /// Calendar month, 1 (January) through 12 (December).
    pub month: u32,
    pub variance: f64,
}

impl VarianceRecord {
    /// Zero-based month index used for vertical band placement
    /// and the `data-month` attribute.
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }
}

/// The full dataset: a base temperature plus one variance record per
/// year/month. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub records: Vec<VarianceRecord>,
}

impl Dataset {
    /// Decode and validate a dataset from the upstream JSON shape
    /// `{ baseTemperature, monthlyVariance: [{ year, month, variance }] }`.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        let dataset: Dataset = serde_json::from_str(body)?;
        dataset.validate()?;
        log::debug!(
            "decoded {} monthly variance records, base temperature {}°C",
            dataset.records.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }

    /// Enforce the load invariants: at least one record, months in 1..=12.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.records.is_empty() {
            anyhow::bail!("dataset contains no monthly variance records");
        }
        for record in &self.records {
            if !(1..=12).contains(&record.month) {
                anyhow::bail!(
                    "record for year {} has month {} outside 1..=12",
                    record.year,
                    record.month
                );
            }
        }
        Ok(())
    }

    /// Min and max year present in the records.
    ///
    /// Only meaningful on a validated (non-empty) dataset; an empty one
    /// yields `(0, 0)`.
    pub fn year_range(&self) -> (i32, i32) {
        if self.records.is_empty() {
            return (0, 0);
        }
        self.records
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), r| {
                (lo.min(r.year), hi.max(r.year))
            })
    }

    /// Absolute temperature for a record: base plus variance.
    pub fn temperature(&self, record: &VarianceRecord) -> f64 {
        self.base_temperature + record.variance
    }
}

/// Full month name for a zero-based month index, via a synthetic
/// reference date (`%B`), January for 0 through December for 11.
pub fn month_name(month_index: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month_index + 1, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 2015, "month": 12, "variance": 1.128}
        ]
    }"#;

    #[test]
    fn test_decode_upstream_shape() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.records.len(), 3);
        assert_eq!(dataset.records[0].year, 1753);
        assert_eq!(dataset.records[0].month, 1);
        assert_eq!(dataset.records[2].variance, 1.128);
    }

    #[test]
    fn test_year_range() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.year_range(), (1753, 2015));
    }

    #[test]
    fn test_temperature_is_base_plus_variance() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let temp = dataset.temperature(&dataset.records[2]);
        assert!((temp - (8.66 + 1.128)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = Dataset::from_json(r#"{"baseTemperature": 8.0, "monthlyVariance": []}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let err = Dataset::from_json(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 1900, "month": 13, "variance": 0.1}]}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Dataset::from_json("{not json").is_err());
    }

    #[test]
    fn test_month_index_is_zero_based() {
        let record = VarianceRecord {
            year: 1900,
            month: 1,
            variance: 0.0,
        };
        assert_eq!(record.month_index(), 0);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(10), "November");
        assert_eq!(month_name(11), "December");
    }
}
