//! Fuzz temporal analysis: arbitrary samples over arbitrary sorted
//! boundaries must either fail cleanly or produce a full statistics table
//! that accounts for every sample.

#![no_main]

use libfuzzer_sys::fuzz_target;

use dk_core::{TemporalDataset, TemporalSample};

fuzz_target!(|input: (Vec<f64>, Vec<(f64, Vec<f64>)>)| {
    let (mut boundaries, rows) = input;
    boundaries.retain(|b| b.is_finite());
    boundaries.sort_by(f64::total_cmp);
    let Ok(mut ds) = TemporalDataset::new(boundaries) else {
        return;
    };
    for (time, values) in rows {
        ds.add_sample(TemporalSample::new("fuzz", time, values));
    }
    if ds.analyze().is_ok() {
        assert_eq!(ds.stats().len(), ds.num_intervals());
        let dims = ds.samples()[0].dims();
        assert!(ds.stats().iter().all(|row| row.len() == dims));
        if dims > 0 {
            let binned: usize = ds
                .stats()
                .iter()
                .map(|row| row.first().map_or(0, |cell| cell.count))
                .sum();
            assert_eq!(binned, ds.samples().len());
        }
    }
});
