//! Additive level-plus-trend forecasting (Holt's linear method)

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};

/// Holt's linear method: an additive model with smoothed level and trend
/// components. Forecasts extend the last level along the last trend.
#[derive(Debug, Clone)]
pub struct HoltLinear {
    /// Name of the model
    name: String,
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
}

/// Trained Holt linear model
#[derive(Debug, Clone)]
pub struct TrainedHoltLinear {
    /// Name of the model
    name: String,
    /// Smoothed level after the last observation
    level: f64,
    /// Smoothed trend after the last observation
    trend: f64,
}

impl HoltLinear {
    /// Create a new Holt linear model
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "alpha must be between 0 and 1".to_string(),
            ));
        }
        if beta <= 0.0 || beta >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "beta must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Holt Linear (alpha={}, beta={})", alpha, beta),
            alpha,
            beta,
        })
    }
}

impl ForecastModel for HoltLinear {
    type Trained = TrainedHoltLinear;

    fn train(&self, series: &TimeSeries) -> Result<Self::Trained> {
        let values = series.values();
        if values.is_empty() {
            return Err(ForecastError::EmptySeries(
                "cannot train on an empty series".to_string(),
            ));
        }

        // Initialize the level with the first observation and the trend
        // with the first difference
        let mut level = values[0];
        let mut trend = if values.len() > 1 {
            values[1] - values[0]
        } else {
            0.0
        };

        for &value in &values[1..] {
            let prev_level = level;
            level = self.alpha * value + (1.0 - self.alpha) * (level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
        }

        Ok(TrainedHoltLinear {
            name: self.name.clone(),
            level,
            trend,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedHoltLinear {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        Ok((1..=horizon)
            .map(|h| self.level + h as f64 * self.trend)
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
