//! Exponential smoothing models for time series forecasting

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Current level
    level: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "alpha must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }
}

impl ForecastModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, series: &TimeSeries) -> Result<Self::Trained> {
        let values = series.values();
        if values.is_empty() {
            return Err(ForecastError::EmptySeries(
                "cannot train on an empty series".to_string(),
            ));
        }

        // Initialize the level with the first observation, then smooth
        let mut level = values[0];
        for &value in &values[1..] {
            level = self.alpha * value + (1.0 - self.alpha) * level;
        }

        Ok(TrainedExponentialSmoothing {
            name: self.name.clone(),
            level,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        // Simple exponential smoothing forecasts are constant at the
        // last level
        Ok(vec![self.level; horizon])
    }

    fn name(&self) -> &str {
        &self.name
    }
}
