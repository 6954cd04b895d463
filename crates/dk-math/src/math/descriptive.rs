//! Descriptive statistics and divergence measures over probability vectors.

use crate::error::{MathError, Result};

/// Terms with less probability mass than this contribute zero to the
/// KL divergence, sidestepping log(0) for negligible outcomes.
const KL_MASS_CUTOFF: f64 = 1e-100;

/// Arithmetic mean. Fails on empty input.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::EmptyInput("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (Bessel-corrected, N-1 divisor).
///
/// Fails when fewer than two elements are supplied.
pub fn std_dev(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData {
            needed: 2,
            actual: values.len(),
        });
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok((ss / (values.len() - 1) as f64).sqrt())
}

/// Kullback-Leibler divergence of `p` from `q`, in nats.
///
/// Computes `sum p[i] * (ln p[i] - ln(q[i] + regularizer))`. Terms where
/// `p[i]` is negligible are skipped. The regularizer lets callers smooth a
/// `q` with empty bins; pass 0.0 for the plain divergence.
pub fn kl_divergence(p: &[f64], q: &[f64], regularizer: f64) -> Result<f64> {
    if p.len() != q.len() {
        return Err(MathError::LengthMismatch {
            expected: p.len(),
            actual: q.len(),
        });
    }
    let mut total = 0.0;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi < KL_MASS_CUTOFF {
            continue;
        }
        total += pi * (pi.ln() - (qi + regularizer).ln());
    }
    Ok(total)
}

/// Squared Euclidean distance between `p` and `q`, each coordinate scaled
/// by `1/scale`.
pub fn sq_dist(p: &[f64], q: &[f64], scale: f64) -> Result<f64> {
    if p.len() != q.len() {
        return Err(MathError::LengthMismatch {
            expected: p.len(),
            actual: q.len(),
        });
    }
    Ok(p.iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| {
            let d = (pi - qi) / scale;
            d * d
        })
        .sum())
}
