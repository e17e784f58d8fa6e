//! Metrics for evaluating forecast accuracy

use crate::error::{ForecastError, Result};

/// Forecast accuracy metrics
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
    /// Percentage of periods where the forecast moved in the observed
    /// direction
    pub direction_accuracy: f64,
}

/// Calculate accuracy metrics for a forecast against actual values over
/// an aligned window.
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::DataError(
            "forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    let smape = actual
        .iter()
        .zip(forecast.iter())
        .map(|(&a, &f)| {
            let denom = a.abs() + f.abs();
            if denom == 0.0 {
                0.0
            } else {
                200.0 * (a - f).abs() / denom
            }
        })
        .sum::<f64>()
        / n;

    // Direction accuracy over consecutive moves, skipping flat pairs
    let moves: Vec<(bool, bool)> = forecast
        .windows(2)
        .zip(actual.windows(2))
        .filter(|(f, a)| (f[1] - f[0]).abs() > 1e-10 && (a[1] - a[0]).abs() > 1e-10)
        .map(|(f, a)| (f[1] > f[0], a[1] > a[0]))
        .collect();
    let direction_accuracy = if moves.is_empty() {
        0.0
    } else {
        let correct = moves.iter().filter(|(f, a)| f == a).count();
        correct as f64 / moves.len() as f64 * 100.0
    };

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
        smape,
        direction_accuracy,
    })
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:       {:.4}", self.mae)?;
        writeln!(f, "  MSE:       {:.4}", self.mse)?;
        writeln!(f, "  RMSE:      {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:      {:.4}%", self.mape)?;
        writeln!(f, "  SMAPE:     {:.4}%", self.smape)?;
        writeln!(f, "  Direction: {:.2}%", self.direction_accuracy)?;
        Ok(())
    }
}
