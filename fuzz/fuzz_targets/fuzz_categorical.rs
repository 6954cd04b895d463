//! Fuzz categorical sampling: for any non-empty normalizable weight vector
//! the drawn index must stay in range, regardless of rounding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use dk_math::math::sample::categorical;
use dk_math::normalize;

fuzz_target!(|input: (u64, Vec<f64>)| {
    let (seed, weights) = input;
    let mut p: Vec<f64> = weights.into_iter().map(f64::abs).collect();
    if p.is_empty() || normalize(&mut p).is_err() {
        return;
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..32 {
        assert!(categorical(&mut rng, &p) < p.len());
    }
});
