//! Short-horizon forecasting and forecast-versus-observation comparison

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Whether the forecast tail sits above the latest observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// The predicted value is strictly above the latest observation
    Higher,
    /// The predicted value is below or equal to the latest observation
    LowerOrEqual,
}

/// Latest observed value versus the farthest-horizon prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Value of the last observation in the series
    pub latest_observed: f64,
    /// Predicted value at the end of the forecast window
    pub predicted_next: f64,
    /// Classification of the predicted move
    pub direction: Direction,
}

/// Runs pluggable forecast models over a series and classifies the
/// predicted move. Stateless; every call allocates fresh state.
#[derive(Debug)]
pub struct Forecaster;

impl Forecaster {
    /// Forecast `periods` future values with the supplied model.
    ///
    /// Fails with [`ForecastError::EmptySeries`] on a series with no
    /// points and [`ForecastError::InvalidHorizon`] when `periods < 1`.
    /// Forecast timestamps continue daily from the last observed date.
    pub fn forecast<M: ForecastModel>(
        series: &TimeSeries,
        periods: usize,
        model: &M,
    ) -> Result<ForecastResult> {
        if series.is_empty() {
            return Err(ForecastError::EmptySeries(format!(
                "model '{}' needs at least one observation",
                model.name()
            )));
        }
        if periods < 1 {
            return Err(ForecastError::InvalidHorizon(
                "forecast horizon must be at least 1 period".to_string(),
            ));
        }

        let trained = model.train(series)?;
        let values = trained.forecast(periods)?;
        if values.len() != periods {
            return Err(ForecastError::DataError(format!(
                "model '{}' returned {} values for a {}-period horizon",
                trained.name(),
                values.len(),
                periods
            )));
        }

        let last = series.last().ok_or_else(|| {
            ForecastError::EmptySeries("series has no last observation".to_string())
        })?;
        let timestamps = future_dates(last.timestamp, periods);

        ForecastResult::new(timestamps, values)
    }

    /// Compare the farthest-horizon prediction against the latest
    /// observation.
    ///
    /// The comparison reads the *last* row of the forecast window, not
    /// the first: a 7-period forecast is judged by its day-7 value. The
    /// move classifies as [`Direction::Higher`] only on a strict
    /// increase; ties are [`Direction::LowerOrEqual`].
    pub fn compare(series: &TimeSeries, forecast: &ForecastResult) -> Result<Comparison> {
        let latest = series.last().ok_or_else(|| {
            ForecastError::EmptySeries("no observed value to compare against".to_string())
        })?;
        let (_, predicted_next) = forecast.last().ok_or_else(|| {
            ForecastError::DataError("forecast has no predictions".to_string())
        })?;

        let direction = if predicted_next > latest.value {
            Direction::Higher
        } else {
            Direction::LowerOrEqual
        };

        Ok(Comparison {
            latest_observed: latest.value,
            predicted_next,
            direction,
        })
    }
}

/// Daily timestamps for `horizon` periods following `last`.
pub fn future_dates(last: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon)
        .map(|d| last + Duration::days(d as i64))
        .collect()
}
