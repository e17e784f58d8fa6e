//! Moving average models for time series forecasting

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};

/// Simple moving average model
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

/// Trained moving average model
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    /// Name of the model
    name: String,
    /// Mean of the trailing window
    last_average: f64,
}

impl MovingAverage {
    /// Create a new moving average model
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Moving Average (window={})", window),
            window,
        })
    }
}

impl ForecastModel for MovingAverage {
    type Trained = TrainedMovingAverage;

    fn train(&self, series: &TimeSeries) -> Result<Self::Trained> {
        let values = series.values();
        if values.len() < self.window {
            return Err(ForecastError::InsufficientData(format!(
                "a window of {} needs at least {} observations, got {}",
                self.window,
                self.window,
                values.len()
            )));
        }

        let last_average =
            values[values.len() - self.window..].iter().sum::<f64>() / self.window as f64;

        Ok(TrainedMovingAverage {
            name: self.name.clone(),
            last_average,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedMovingAverage {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        // The trailing-window mean carries forward unchanged
        Ok(vec![self.last_average; horizon])
    }

    fn name(&self) -> &str {
        &self.name
    }
}
