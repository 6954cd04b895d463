//! Numerically stable log-domain primitives and normalization.

use crate::error::{MathError, Result};

/// Saturation floor for log-probabilities.
///
/// `log_normalize` clamps every output at this value so that outcomes with
/// vanishing mass stay representable instead of collapsing to -inf.
pub const LOG_PROB_FLOOR: f64 = -200.0;

/// Stable log(exp(a) + exp(b)).
///
/// Commutative, and never overflows for finite operands: the larger operand
/// is factored out and the remainder goes through `ln_1p`.
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if a == f64::NEG_INFINITY {
        return b;
    }
    if b == f64::NEG_INFINITY {
        return a;
    }
    if a == f64::INFINITY || b == f64::INFINITY {
        return f64::INFINITY;
    }
    a.max(b) + (-(a - b).abs()).exp().ln_1p()
}

/// Stable log(sum(exp(values))). Returns -inf for empty input.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        // Empty, all -inf, or a +inf present: the fold value is already
        // the right answer.
        return max;
    }
    let sum: f64 = values.iter().map(|v| (v - max).exp()).sum();
    max + sum.ln()
}

/// Linear normalization in place: divide every element by the total.
///
/// Fails with [`MathError::ZeroMass`] when the total is zero, negative, or
/// non-finite; the slice is left untouched in that case.
pub fn normalize(weights: &mut [f64]) -> Result<()> {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(MathError::ZeroMass);
    }
    for w in weights.iter_mut() {
        *w /= total;
    }
    Ok(())
}

/// Log-domain normalization in place.
///
/// Shifts by the maximum for stability, subtracts the log of the summed
/// exponentials, and clamps every result at [`LOG_PROB_FLOOR`]. After this,
/// `exp` of the slice sums to 1 (up to mass lost to the floor).
pub fn log_normalize(log_weights: &mut [f64]) -> Result<()> {
    if log_weights.is_empty() {
        return Err(MathError::EmptyInput("log_normalize"));
    }
    let log_total = log_sum_exp(log_weights);
    if !log_total.is_finite() {
        return Err(MathError::ZeroMass);
    }
    for lw in log_weights.iter_mut() {
        *lw = (*lw - log_total).max(LOG_PROB_FLOOR);
    }
    Ok(())
}
