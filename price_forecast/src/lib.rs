//! # Price Forecast
//!
//! A Rust library for fitting polynomial trend lines to historical close
//! prices and comparing short-horizon forecasts against the latest
//! observation.
//!
//! ## Features
//!
//! - Date-indexed close-price series with CSV loading
//! - Polynomial trend fitting over date ordinals (ordinary least squares)
//! - Pluggable forecasting models (Holt linear, exponential smoothing,
//!   moving average)
//! - Forecast-versus-observation comparison (higher / lower-or-equal)
//! - Forecast accuracy metrics
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use price_forecast::data::TimeSeries;
//! use price_forecast::forecast::Forecaster;
//! use price_forecast::models::holt::HoltLinear;
//! use price_forecast::trend::TrendFitter;
//!
//! fn main() -> price_forecast::error::Result<()> {
//!     let timestamps: Vec<NaiveDate> = (1..=5)
//!         .map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
//!         .collect();
//!     let series = TimeSeries::from_parts(timestamps, vec![10.0, 12.0, 14.0, 16.0, 18.0])?;
//!
//!     // Fit a linear trend and read it at a future date
//!     let trend = TrendFitter::new(1).fit(&series)?;
//!     let projected = trend.evaluate(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
//!     assert!((projected - 20.0).abs() < 1e-6);
//!
//!     // Forecast a week ahead and classify the predicted move
//!     let model = HoltLinear::new(0.5, 0.3)?;
//!     let forecast = Forecaster::forecast(&series, 7, &model)?;
//!     let comparison = Forecaster::compare(&series, &forecast)?;
//!     println!("{:?}", comparison.direction);
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod forecast;
pub mod format;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod trend;

// Re-export commonly used types
pub use crate::data::{DataLoader, TimeSeries, TimeSeriesPoint};
pub use crate::error::ForecastError;
pub use crate::forecast::{Comparison, Direction, Forecaster};
pub use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
pub use crate::provider::{CsvProvider, HistoryRange, MarketDataProvider};
pub use crate::trend::{TrendFitter, TrendModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
