//! Time series data handling for trend fitting and forecasting

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single observation: a calendar date and the value recorded on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Observation date
    pub timestamp: NaiveDate,
    /// Observed value (typically a close price)
    pub value: f64,
}

/// Date-indexed series of values, sorted ascending with no duplicate dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

/// Data loader for delimited files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a close-price series from a CSV file with a date column and a
    /// close (or price) column. A missing or unreadable file is reported
    /// as [`ForecastError::DataUnavailable`].
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<TimeSeries> {
        let path = path.as_ref();
        let reader = CsvReader::from_path(path).map_err(|e| {
            ForecastError::DataUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let df = reader.has_header(true).finish()?;

        Self::from_dataframe(&df)
    }

    /// Extract a normalized close-price series from an existing DataFrame.
    pub fn from_dataframe(df: &DataFrame) -> Result<TimeSeries> {
        let time_column = Self::detect_time_column(df)?;
        let value_column = Self::detect_value_column(df)?;

        let timestamps = Self::column_as_dates(df, &time_column)?;
        let values = Self::column_as_f64(df, &value_column)?;

        TimeSeries::from_parts(timestamps, values)
    }

    /// Detect the date column in a DataFrame
    fn detect_time_column(df: &DataFrame) -> Result<String> {
        for name in df.get_column_names() {
            let lower = name.to_lowercase();
            if lower.contains("date") || lower.contains("time") {
                return Ok(name.to_string());
            }
        }

        Err(ForecastError::DataError(
            "no date column found in data".to_string(),
        ))
    }

    /// Detect the close-price column, falling back to a generic price or
    /// value column
    fn detect_value_column(df: &DataFrame) -> Result<String> {
        for name in df.get_column_names() {
            if name.to_lowercase().contains("close") {
                return Ok(name.to_string());
            }
        }
        for name in df.get_column_names() {
            let lower = name.to_lowercase();
            if lower.contains("price") || lower.contains("value") {
                return Ok(name.to_string());
            }
        }

        Err(ForecastError::DataError(
            "no close or price column found in data".to_string(),
        ))
    }

    fn column_as_dates(df: &DataFrame, column: &str) -> Result<Vec<NaiveDate>> {
        let col = df.column(column)?;

        match col.dtype() {
            DataType::Utf8 => col
                .utf8()?
                .into_iter()
                .map(|opt| {
                    let raw = opt.ok_or_else(|| {
                        ForecastError::DataError(format!("missing date in column '{}'", column))
                    })?;
                    Self::parse_date(raw, column)
                })
                .collect(),
            DataType::Date => col
                .date()?
                .into_iter()
                .map(|opt| {
                    let days = opt.ok_or_else(|| {
                        ForecastError::DataError(format!("missing date in column '{}'", column))
                    })?;
                    // polars Date is days since the Unix epoch
                    Ok(NaiveDate::default() + chrono::Duration::days(days as i64))
                })
                .collect(),
            other => Err(ForecastError::DataError(format!(
                "unsupported dtype {:?} for date column '{}'",
                other, column
            ))),
        }
    }

    fn parse_date(raw: &str, column: &str) -> Result<NaiveDate> {
        let trimmed = raw.trim();
        // Provider exports may carry a time-of-day suffix on the date
        let candidate = trimmed.get(..10).unwrap_or(trimmed);

        NaiveDate::parse_from_str(candidate, "%Y-%m-%d").map_err(|e| {
            ForecastError::DataError(format!(
                "cannot parse date '{}' in column '{}': {}",
                raw, column, e
            ))
        })
    }

    fn column_as_f64(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
        let col = df.column(column)?;
        let casted = col.cast(&DataType::Float64)?;

        casted
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, opt)| {
                opt.ok_or_else(|| {
                    ForecastError::DataError(format!(
                        "missing value in column '{}' at row {}",
                        column, row
                    ))
                })
            })
            .collect()
    }
}

impl TimeSeries {
    /// Build a series from points, validating that timestamps are
    /// strictly increasing and values are finite.
    pub fn new(points: Vec<TimeSeriesPoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(ForecastError::DataError(format!(
                    "timestamps must be strictly increasing: {} does not follow {}",
                    pair[1].timestamp, pair[0].timestamp
                )));
            }
        }
        if let Some(point) = points.iter().find(|p| !p.value.is_finite()) {
            return Err(ForecastError::DataError(format!(
                "non-finite value at {}",
                point.timestamp
            )));
        }

        Ok(Self { points })
    }

    /// Build a series from parallel date and value vectors.
    pub fn from_parts(timestamps: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "timestamp and value lengths differ: {} vs {}",
                timestamps.len(),
                values.len()
            )));
        }

        let points = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, value)| TimeSeriesPoint { timestamp, value })
            .collect();

        Self::new(points)
    }

    /// All observations, oldest first.
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Observation dates, oldest first.
    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Observed values, oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// The most recent observation.
    pub fn last(&self) -> Option<&TimeSeriesPoint> {
        self.points.last()
    }

    /// Check if the time series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the length of the time series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Get a sub-series from start to end index (end defaults to the
    /// series length).
    pub fn slice(&self, start: usize, end: Option<usize>) -> Result<Self> {
        let end = end.unwrap_or(self.points.len());
        if start > end || end > self.points.len() {
            return Err(ForecastError::DataError(format!(
                "invalid slice bounds {}..{} for series of length {}",
                start,
                end,
                self.points.len()
            )));
        }

        Ok(Self {
            points: self.points[start..end].to_vec(),
        })
    }

    /// Arithmetic mean of the values.
    pub fn mean(&self) -> Result<f64> {
        if self.points.is_empty() {
            return Err(ForecastError::EmptySeries(
                "cannot take the mean of an empty series".to_string(),
            ));
        }

        let sum: f64 = self.points.iter().map(|p| p.value).sum();
        Ok(sum / self.points.len() as f64)
    }

    /// Population standard deviation of the values.
    pub fn std_dev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let variance: f64 = self
            .points
            .iter()
            .map(|p| (p.value - mean).powi(2))
            .sum::<f64>()
            / self.points.len() as f64;

        Ok(variance.sqrt())
    }
}
