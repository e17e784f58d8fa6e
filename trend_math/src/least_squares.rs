//! Ordinary least-squares polynomial fitting.

use crate::polynomial::Polynomial;
use crate::{MathError, Result};

/// Fit a polynomial of the given degree to `(xs, ys)` by ordinary least
/// squares, choosing the coefficients that minimize the sum of squared
/// residuals.
///
/// The fit is solved through the normal equations. Callers with wide x
/// ranges should rescale before fitting; moments up to `x^(2 * degree)`
/// must stay representable in `f64`.
pub fn fit_polynomial(xs: &[f64], ys: &[f64], degree: usize) -> Result<Polynomial> {
    if xs.len() != ys.len() {
        return Err(MathError::InvalidInput(format!(
            "x and y lengths differ: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() <= degree {
        return Err(MathError::InsufficientData(format!(
            "a degree {} fit needs at least {} points, got {}",
            degree,
            degree + 1,
            xs.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput(
            "non-finite value in input".to_string(),
        ));
    }
    if xs.len() > 1 && xs.iter().all(|&x| x == xs[0]) {
        return Err(MathError::DegenerateInput(
            "zero variance in x values".to_string(),
        ));
    }

    let n = degree + 1;

    // Accumulate the normal equations (X^T X) c = X^T y over the
    // monomial basis.
    let mut ata = vec![vec![0.0; n]; n];
    let mut aty = vec![0.0; n];
    let mut powers = vec![1.0; 2 * degree + 1];

    for (&x, &y) in xs.iter().zip(ys) {
        for k in 1..powers.len() {
            powers[k] = powers[k - 1] * x;
        }
        for i in 0..n {
            for (j, entry) in ata[i].iter_mut().enumerate() {
                *entry += powers[i + j];
            }
            aty[i] += powers[i] * y;
        }
    }

    let coefficients = solve_linear_system(ata, aty)?;
    Ok(Polynomial::new(coefficients))
}

/// Solve `A c = b` by Gaussian elimination with partial pivoting.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return Err(MathError::CalculationError(
                "normal equations are singular; not enough distinct x values".to_string(),
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut coefficients = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[row][k] * coefficients[k];
        }
        coefficients[row] = sum / a[row][row];
    }

    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_line() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [10.0, 12.0, 14.0];

        let poly = fit_polynomial(&xs, &ys, 1).unwrap();
        let coeffs = poly.coefficients();

        assert_eq!(coeffs.len(), 2);
        assert!((coeffs[0] - 10.0).abs() < 1e-9);
        assert!((coeffs[1] - 2.0).abs() < 1e-9);
        assert!((poly.evaluate(3.0) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_degree_zero_is_mean() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [4.0, 6.0, 8.0, 10.0];

        let poly = fit_polynomial(&xs, &ys, 0).unwrap();

        assert_eq!(poly.coefficients().len(), 1);
        assert!((poly.coefficients()[0] - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_quadratic_interpolation() {
        // y = x^2 - 2x + 1 through three points fits with zero residual
        let xs = [-1.0, 0.0, 2.0];
        let ys: Vec<f64> = xs.iter().map(|x| x * x - 2.0 * x + 1.0).collect();

        let poly = fit_polynomial(&xs, &ys, 2).unwrap();

        for (&x, &y) in xs.iter().zip(&ys) {
            assert!((poly.evaluate(x) - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_overdetermined_quadratic() {
        let xs: Vec<f64> = (0..20).map(|i| i as f64 / 10.0 - 1.0).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x * x - 0.5 * x + 2.0).collect();

        let poly = fit_polynomial(&xs, &ys, 2).unwrap();

        assert!((poly.coefficients()[0] - 2.0).abs() < 1e-8);
        assert!((poly.coefficients()[1] + 0.5).abs() < 1e-8);
        assert!((poly.coefficients()[2] - 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_insufficient_data() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 3.0];

        let result = fit_polynomial(&xs, &ys, 3);
        assert!(matches!(result, Err(MathError::InsufficientData(_))));

        let result = fit_polynomial(&xs, &ys, 5);
        assert!(matches!(result, Err(MathError::InsufficientData(_))));
    }

    #[test]
    fn test_degenerate_input() {
        let xs = [1.0, 1.0, 1.0];
        let ys = [1.0, 2.0, 3.0];

        let result = fit_polynomial(&xs, &ys, 1);
        assert!(matches!(result, Err(MathError::DegenerateInput(_))));
    }

    #[test]
    fn test_single_point_constant_fit() {
        // One observation determines a degree-0 fit exactly
        let poly = fit_polynomial(&[5.0], &[9.5], 0).unwrap();
        assert!((poly.coefficients()[0] - 9.5).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        let result = fit_polynomial(&[0.0, 1.0], &[1.0], 1);
        assert!(matches!(result, Err(MathError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_input() {
        let result = fit_polynomial(&[0.0, f64::NAN], &[1.0, 2.0], 1);
        assert!(matches!(result, Err(MathError::InvalidInput(_))));
    }
}
