//! Sampling primitives over an explicit, caller-supplied generator.
//!
//! Nothing here touches global RNG state: every function takes
//! `&mut impl Rng`, so tests seed a `SmallRng` and replay exact draws.

use rand::Rng;

/// Uniform draw in [0, 1).
pub fn uniform<R: Rng>(rng: &mut R) -> f64 {
    rng.random()
}

/// Uniform draw in [lo, hi).
pub fn uniform_in<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.random::<f64>() * (hi - lo)
}

/// Gaussian draw via the Box-Muller transform.
pub fn gauss<R: Rng>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    // 1 - u maps [0,1) to (0,1], keeping the log argument positive.
    let u1 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos() * sigma + mu
}

/// Categorical draw from a probability vector: returns an index with
/// probability `p[i]`.
///
/// Walks the vector consuming residual mass from a single uniform draw.
/// The last index is returned as a fallback when rounding leaves residual
/// mass, so the result is always in range for non-empty `p`. Requires `p`
/// to be normalized and non-negative; anything else is a caller bug.
pub fn categorical<R: Rng>(rng: &mut R, p: &[f64]) -> usize {
    debug_assert!(!p.is_empty(), "categorical draw from empty vector");
    let mut residual: f64 = rng.random();
    for (i, &pi) in p.iter().enumerate().take(p.len().saturating_sub(1)) {
        if residual < pi {
            return i;
        }
        residual -= pi;
    }
    p.len().saturating_sub(1)
}
