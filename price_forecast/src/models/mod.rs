//! Forecasting models for time series data

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;

/// Forecast result: predicted values for consecutive future periods,
/// oldest first. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    timestamps: Vec<NaiveDate>,
    values: Vec<f64>,
    horizons: usize,
}

impl ForecastResult {
    /// Create a new forecast result from parallel timestamp and value
    /// vectors.
    pub fn new(timestamps: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "timestamps length ({}) doesn't match values length ({})",
                timestamps.len(),
                values.len()
            )));
        }
        if values.is_empty() {
            return Err(ForecastError::InvalidHorizon(
                "a forecast must cover at least one period".to_string(),
            ));
        }
        for pair in timestamps.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ForecastError::DataError(format!(
                    "forecast timestamps must be strictly increasing: {} does not follow {}",
                    pair[1], pair[0]
                )));
            }
        }

        let horizons = values.len();
        Ok(Self {
            timestamps,
            values,
            horizons,
        })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the forecast timestamps
    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    /// Get the number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.horizons
    }

    /// The farthest-horizon prediction.
    pub fn last(&self) -> Option<(NaiveDate, f64)> {
        match (self.timestamps.last(), self.values.last()) {
            (Some(&timestamp), Some(&value)) => Some((timestamp, value)),
            _ => None,
        }
    }

    /// Serialize the forecast to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ForecastError::DataError(format!("cannot serialize forecast: {}", e)))
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Predict values for the next `horizon` periods.
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on time series data.
///
/// Implementations are deterministic: training on identical series and
/// forecasting identical horizons yields identical values.
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on time series data
    fn train(&self, series: &TimeSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod exponential_smoothing;
pub mod holt;
pub mod moving_average;
