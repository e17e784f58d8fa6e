//! Polynomial trend fitting over date-indexed series

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use trend_math::least_squares::fit_polynomial;
use trend_math::polynomial::Polynomial;

/// Fits a polynomial trend of fixed degree to a time series by ordinary
/// least squares over date ordinals.
#[derive(Debug, Clone, Copy)]
pub struct TrendFitter {
    degree: usize,
}

/// A fitted polynomial trend. Immutable once produced.
///
/// The independent variable is the day offset from the first training
/// date, centered and rescaled to `[-1, 1]` over the training range so
/// the normal equations stay well conditioned up to degree 5 on series
/// spanning hundreds of days. The encoding parameters are stored here,
/// which makes evaluation at any date deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendModel {
    origin: NaiveDate,
    center: f64,
    scale: f64,
    polynomial: Polynomial,
}

impl TrendFitter {
    /// Create a fitter for polynomials of the given degree.
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// Degree of the polynomials this fitter produces.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Fit a polynomial trend to the series.
    ///
    /// Fails with [`ForecastError::InsufficientData`] when the series has
    /// `degree` or fewer points, and with [`ForecastError::DegenerateInput`]
    /// when the independent variable has no variance.
    pub fn fit(&self, series: &TimeSeries) -> Result<TrendModel> {
        if series.is_empty() {
            return Err(ForecastError::EmptySeries(
                "cannot fit a trend to an empty series".to_string(),
            ));
        }
        if series.len() <= self.degree {
            return Err(ForecastError::InsufficientData(format!(
                "a degree {} trend needs at least {} points, got {}",
                self.degree,
                self.degree + 1,
                series.len()
            )));
        }

        let origin = series.points()[0].timestamp;
        let offsets: Vec<f64> = series
            .points()
            .iter()
            .map(|p| (p.timestamp - origin).num_days() as f64)
            .collect();

        // Offsets are sorted ascending, so the range is first..last.
        let min = offsets[0];
        let max = offsets[offsets.len() - 1];
        let center = (min + max) / 2.0;
        let half = (max - min) / 2.0;
        let scale = if half > 0.0 { half } else { 1.0 };
        let scaled: Vec<f64> = offsets.iter().map(|x| (x - center) / scale).collect();

        let polynomial = fit_polynomial(&scaled, &series.values(), self.degree)?;

        Ok(TrendModel {
            origin,
            center,
            scale,
            polynomial,
        })
    }
}

impl TrendModel {
    /// Evaluate the fitted trend at a date.
    ///
    /// Pure and side-effect-free. Dates outside the training range
    /// extrapolate the polynomial; extrapolation accuracy is not
    /// guaranteed.
    pub fn evaluate(&self, timestamp: NaiveDate) -> f64 {
        let offset = (timestamp - self.origin).num_days() as f64;
        self.polynomial.evaluate((offset - self.center) / self.scale)
    }

    /// Fitted coefficients in ascending order of power, over the model's
    /// scaled day-offset coordinate. Length is `degree + 1`.
    pub fn coefficients(&self) -> &[f64] {
        self.polynomial.coefficients()
    }

    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    /// First date of the training range.
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }
}
