//! Market-data retrieval glue around the core series types.
//!
//! Retrieval is an external collaborator: the core only consumes the
//! normalized series. This module keeps the collaborator's surface thin:
//! a trait, the dashboard's duration-label lookup table, and a CSV-backed
//! implementation for local exports.

use crate::data::{DataLoader, TimeSeries};
use crate::error::{ForecastError, Result};
use chrono::Datelike;
use std::path::PathBuf;
use std::str::FromStr;

/// Fetch window presets offered by the dashboards, mapped to the
/// provider's `(period, interval)` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    /// One day of hourly rows
    OneDay,
    /// Five days of daily rows
    FiveDays,
    /// One month of daily rows
    OneMonth,
    /// Six months of weekly rows
    SixMonths,
    /// Calendar year to date, monthly rows
    YearToDate,
    /// One year of monthly rows
    OneYear,
    /// Five years of quarterly rows
    FiveYears,
}

impl HistoryRange {
    /// Provider period string.
    pub fn period(&self) -> &'static str {
        match self {
            HistoryRange::OneDay => "1d",
            HistoryRange::FiveDays => "5d",
            HistoryRange::OneMonth => "1mo",
            HistoryRange::SixMonths => "6mo",
            HistoryRange::YearToDate => "ytd",
            HistoryRange::OneYear => "1y",
            HistoryRange::FiveYears => "5y",
        }
    }

    /// Sampling interval paired with the period.
    pub fn interval(&self) -> &'static str {
        match self {
            HistoryRange::OneDay => "1h",
            HistoryRange::FiveDays => "1d",
            HistoryRange::OneMonth => "1d",
            HistoryRange::SixMonths => "1wk",
            HistoryRange::YearToDate => "1mo",
            HistoryRange::OneYear => "1mo",
            HistoryRange::FiveYears => "3mo",
        }
    }

    /// Menu label shown by the dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            HistoryRange::OneDay => "1D",
            HistoryRange::FiveDays => "5D",
            HistoryRange::OneMonth => "1M",
            HistoryRange::SixMonths => "6M",
            HistoryRange::YearToDate => "YTD",
            HistoryRange::OneYear => "1Y",
            HistoryRange::FiveYears => "5Y",
        }
    }

    /// Approximate number of daily rows covered by the period, used by
    /// file-backed providers holding full history. `None` means the
    /// window is anchored to the calendar rather than a row count.
    fn daily_rows(&self) -> Option<usize> {
        match self {
            HistoryRange::OneDay => Some(1),
            HistoryRange::FiveDays => Some(5),
            HistoryRange::OneMonth => Some(21),
            HistoryRange::SixMonths => Some(126),
            HistoryRange::OneYear => Some(252),
            HistoryRange::FiveYears => Some(1260),
            HistoryRange::YearToDate => None,
        }
    }
}

impl FromStr for HistoryRange {
    type Err = ForecastError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1D" => Ok(HistoryRange::OneDay),
            "5D" => Ok(HistoryRange::FiveDays),
            "1M" => Ok(HistoryRange::OneMonth),
            "6M" => Ok(HistoryRange::SixMonths),
            "YTD" => Ok(HistoryRange::YearToDate),
            "1Y" => Ok(HistoryRange::OneYear),
            "5Y" => Ok(HistoryRange::FiveYears),
            other => Err(ForecastError::DataError(format!(
                "unknown history range '{}'",
                other
            ))),
        }
    }
}

/// Supplies historical close-price series for ticker symbols.
pub trait MarketDataProvider {
    /// Historical close prices for `symbol` over `range`.
    ///
    /// Retrieval failures (missing symbol, unreachable source, rate
    /// limits) surface as [`ForecastError::DataUnavailable`], never as a
    /// silently defaulted series.
    fn history(&self, symbol: &str, range: HistoryRange) -> Result<TimeSeries>;
}

/// Provider backed by per-symbol CSV exports in a local directory,
/// one `<SYMBOL>.csv` per ticker.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    /// Create a provider over a directory of CSV exports.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl MarketDataProvider for CsvProvider {
    fn history(&self, symbol: &str, range: HistoryRange) -> Result<TimeSeries> {
        let path = self.dir.join(format!("{}.csv", symbol));
        if !path.is_file() {
            return Err(ForecastError::DataUnavailable(format!(
                "no local history for '{}' ({} not found)",
                symbol,
                path.display()
            )));
        }

        let series = DataLoader::from_csv(&path)?;

        match range.daily_rows() {
            Some(rows) if series.len() > rows => series.slice(series.len() - rows, None),
            Some(_) => Ok(series),
            None => {
                // Year to date: keep rows from the latest observation's
                // calendar year
                let year = match series.last() {
                    Some(point) => point.timestamp.year(),
                    None => return Ok(series),
                };
                let points = series
                    .points()
                    .iter()
                    .filter(|p| p.timestamp.year() == year)
                    .copied()
                    .collect();
                TimeSeries::new(points)
            }
        }
    }
}
