// File: crates/heatmap-core/src/dataset.rs
// Summary: Monthly temperature variance dataset (JSON model, validation, extents).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One observation: deviation (°C) from the base temperature for a year/month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    /// 1 = January .. 12 = December.
    pub month: u32,
    pub variance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl Dataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthlyVariance>) -> Self {
        Self { base_temperature, monthly_variance }
    }

    /// Parse and validate a `global-temperature.json` document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ds: Dataset = serde_json::from_str(s)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let ds: Dataset = serde_json::from_slice(bytes)?;
        ds.validate()?;
        Ok(ds)
    }

    /// Contract: at least one entry, every month in 1..=12, finite numbers, and
    /// every year (and the year after it) representable as a calendar date.
    pub fn validate(&self) -> Result<()> {
        if self.monthly_variance.is_empty() {
            return Err(Error::dataset("monthlyVariance is empty"));
        }
        if !self.base_temperature.is_finite() {
            return Err(Error::dataset("baseTemperature is not a finite number"));
        }
        for (i, e) in self.monthly_variance.iter().enumerate() {
            if !(1..=12).contains(&e.month) {
                return Err(Error::dataset(format!("entry {i}: month {} outside 1..=12", e.month)));
            }
            if !has_calendar_span(e.year) {
                return Err(Error::dataset(format!("entry {i}: year {} outside the calendar range", e.year)));
            }
            if !e.variance.is_finite() {
                return Err(Error::dataset(format!("entry {i}: variance is not finite")));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize { self.monthly_variance.len() }

    pub fn is_empty(&self) -> bool { self.monthly_variance.is_empty() }

    /// Absolute temperature of an entry.
    #[inline]
    pub fn temperature(&self, e: &MonthlyVariance) -> f64 { self.base_temperature + e.variance }

    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        extent(self.monthly_variance.iter().map(|e| self.temperature(e)))
    }

    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|e| e.year).min()?;
        let max = self.monthly_variance.iter().map(|e| e.year).max()?;
        Some((min, max))
    }

    pub fn month_extent(&self) -> Option<(u32, u32)> {
        let min = self.monthly_variance.iter().map(|e| e.month).min()?;
        let max = self.monthly_variance.iter().map(|e| e.month).max()?;
        Some((min, max))
    }
}

/// 1 January of `year` and of `year + 1` both exist.
fn has_calendar_span(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some()
        && year.checked_add(1).and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1)).is_some()
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 2015, "month": 9, "variance": 1.053}
        ]
    }"#;

    #[test]
    fn parses_camel_case_document() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.base_temperature, 8.66);
        assert_eq!(ds.year_extent(), Some((1753, 2015)));
        assert_eq!(ds.month_extent(), Some((1, 9)));
        let (lo, hi) = ds.temperature_extent().unwrap();
        assert!((lo - (8.66 - 2.223)).abs() < 1e-12);
        assert!((hi - (8.66 + 1.053)).abs() < 1e-12);
    }

    #[test]
    fn rejects_month_out_of_range() {
        let ds = Dataset::new(8.0, vec![MonthlyVariance { year: 1900, month: 13, variance: 0.0 }]);
        let err = ds.validate().unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
        let ds = Dataset::new(8.0, vec![MonthlyVariance { year: 1900, month: 0, variance: 0.0 }]);
        assert!(ds.validate().is_err());
    }

    #[test]
    fn rejects_years_without_a_calendar_date() {
        for year in [i32::MAX, i32::MIN, 300_000] {
            let ds = Dataset::new(8.0, vec![MonthlyVariance { year, month: 1, variance: 0.0 }]);
            assert!(matches!(ds.validate(), Err(Error::Dataset(_))), "{year}");
        }
        let ds = Dataset::new(8.0, vec![MonthlyVariance { year: -500, month: 1, variance: 0.0 }]);
        ds.validate().unwrap();
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(matches!(
            Dataset::from_json_str(r#"{"baseTemperature": 8.0, "monthlyVariance": []}"#),
            Err(Error::Dataset(_))
        ));
        assert!(matches!(Dataset::from_json_str(r#"{"baseTemperature": 8.0}"#), Err(Error::Parse(_))));
        assert!(matches!(Dataset::from_json_slice(b"<html>"), Err(Error::Parse(_))));
    }
}
