//! Property-based tests for the container invariants.

use proptest::prelude::*;

use dk_core::{ProbDist, TemporalDataset};

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-10;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() <= tol.max(tol * a.abs().max(b.abs()))
}

/// Strategy for a non-empty vector of strictly positive weights.
fn positive_weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1e-6..1e6f64, 1..32)
}

fn dist_from_weights(weights: &[f64]) -> ProbDist<usize> {
    let mut d: ProbDist<usize> = ProbDist::with_len(weights.len());
    for (i, slot) in d.labels_mut().iter_mut().enumerate() {
        *slot = i;
    }
    d.p_mut().copy_from_slice(weights);
    d
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// After normalize, p sums to 1, lp mirrors ln(p), and mode/max agree
    /// with a direct scan.
    #[test]
    fn normalize_invariants(w in positive_weights()) {
        let mut d = dist_from_weights(&w);
        d.normalize().unwrap();

        let total: f64 = d.p().iter().sum();
        prop_assert!(approx_eq(total, 1.0, TOL));
        for (p, lp) in d.p().iter().zip(d.lp()) {
            prop_assert!(approx_eq(p.ln(), *lp, TOL));
        }

        let mode = d.mode_id().unwrap();
        let max = d.max_p().unwrap();
        prop_assert!(approx_eq(d.p()[mode], max, TOL));
        prop_assert!(d.p().iter().all(|&pi| pi <= max + TOL));
        // First occurrence wins on ties.
        prop_assert!(d.p()[..mode].iter().all(|&pi| pi < max));
    }

    /// Sorting orders p non-increasingly, keeps the label set, preserves
    /// total mass, and leaves lp in sync.
    #[test]
    fn sort_invariants(mut w in positive_weights()) {
        dk_math::normalize(&mut w).unwrap();
        let mut d = dist_from_weights(&w);
        d.p_to_lp();
        d.sort_by_prob();

        prop_assert!(d.p().windows(2).all(|pair| pair[0] >= pair[1]));
        prop_assert!(approx_eq(d.p().iter().sum::<f64>(), 1.0, TOL));
        for (p, lp) in d.p().iter().zip(d.lp()) {
            prop_assert!(approx_eq(p.ln(), *lp, TOL));
        }

        let mut labels: Vec<usize> = d.labels().to_vec();
        labels.sort_unstable();
        prop_assert_eq!(labels, (0..w.len()).collect::<Vec<_>>());
        // Each label still carries its own probability.
        for (p, &label) in d.p().iter().zip(d.labels()) {
            prop_assert!(approx_eq(*p, w[label], TOL));
        }
    }

    /// Entropy of a normalized distribution lies in [0, ln n].
    #[test]
    fn entropy_bounds(w in positive_weights()) {
        let mut d = dist_from_weights(&w);
        d.normalize().unwrap();
        let h = d.entropy();
        prop_assert!(h >= -TOL);
        prop_assert!(h <= (w.len() as f64).ln() + TOL);
    }

    /// Interval ids are in range and bracket the queried time.
    #[test]
    fn interval_of_brackets_time(
        mut boundaries in prop::collection::vec(-1e6..1e6f64, 1..16),
        time in -1e7..1e7f64,
    ) {
        boundaries.sort_by(f64::total_cmp);
        let ds = TemporalDataset::new(boundaries.clone()).unwrap();
        let id = ds.interval_of(time);
        prop_assert!(id <= boundaries.len());
        if id > 0 {
            prop_assert!(time >= boundaries[id - 1]);
        }
        if id < boundaries.len() {
            prop_assert!(time < boundaries[id]);
        }
    }
}
