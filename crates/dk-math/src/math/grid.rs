//! Evenly spaced grids for parameter sweeps.

use crate::error::{MathError, Result};

/// `n` evenly spaced points from `min` to `max` inclusive.
///
/// Requires `n >= 2` (both endpoints are always emitted).
pub fn linear_intervals(min: f64, max: f64, n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(MathError::BadGrid(format!(
            "need at least 2 points, got {n}"
        )));
    }
    let step = (max - min) / (n - 1) as f64;
    Ok((0..n).map(|i| min + i as f64 * step).collect())
}

/// `n` log-spaced points from `min` to `max` inclusive.
///
/// Requires `n >= 2` and strictly positive endpoints.
pub fn log_intervals(min: f64, max: f64, n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(MathError::BadGrid(format!(
            "need at least 2 points, got {n}"
        )));
    }
    if min <= 0.0 || max <= 0.0 {
        return Err(MathError::BadGrid(format!(
            "log-spaced grid needs positive endpoints, got [{min}, {max}]"
        )));
    }
    let step = (max.ln() - min.ln()) / (n - 1) as f64;
    Ok((0..n).map(|i| min * (i as f64 * step).exp()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn linear_endpoints_and_spacing() {
        let g = linear_intervals(0.0, 1.0, 5).unwrap();
        assert_eq!(g.len(), 5);
        assert!(approx_eq(g[0], 0.0, 1e-15));
        assert!(approx_eq(g[4], 1.0, 1e-15));
        assert!(approx_eq(g[2], 0.5, 1e-15));
    }

    #[test]
    fn linear_too_few_points() {
        assert!(matches!(
            linear_intervals(0.0, 1.0, 1),
            Err(MathError::BadGrid(_))
        ));
    }

    #[test]
    fn log_endpoints_and_ratios() {
        let g = log_intervals(1.0, 100.0, 3).unwrap();
        assert!(approx_eq(g[0], 1.0, 1e-12));
        assert!(approx_eq(g[1], 10.0, 1e-12));
        assert!(approx_eq(g[2], 100.0, 1e-10));
    }

    #[test]
    fn log_rejects_nonpositive_endpoints() {
        assert!(log_intervals(0.0, 10.0, 3).is_err());
        assert!(log_intervals(-1.0, 10.0, 3).is_err());
    }
}
