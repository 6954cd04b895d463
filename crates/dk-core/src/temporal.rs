//! Time-binned descriptive statistics over multi-dimensional samples.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use dk_math::math::descriptive;

/// One time-stamped reading: a label, a scalar time, and one numeric value
/// per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalSample {
    pub label: String,
    pub time: f64,
    pub values: Vec<f64>,
}

impl TemporalSample {
    pub fn new(label: impl Into<String>, time: f64, values: Vec<f64>) -> Self {
        TemporalSample {
            label: label.into(),
            time,
            values,
        }
    }

    /// Number of dimensions carried by this sample.
    pub fn dims(&self) -> usize {
        self.values.len()
    }
}

/// Count, mean, and sample standard deviation for one interval/dimension
/// cell. All zero for an empty cell; `std_dev` is 0 for a singleton cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Samples binned into half-open time intervals.
///
/// N ascending boundary times define N+1 intervals `(-inf,b0)`, `[b0,b1)`,
/// ..., `[b_{N-1},inf)`. A time equal to a boundary belongs to the upper
/// interval. Samples are append-only; the statistics table is recomputed
/// wholesale by [`analyze`](Self::analyze) rather than maintained
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalDataset {
    boundaries: Vec<f64>,
    samples: Vec<TemporalSample>,
    /// Indexed `[interval][dimension]`; empty until `analyze` runs.
    stats: Vec<Vec<DimStats>>,
}

impl TemporalDataset {
    /// Build a dataset over the given boundary times.
    ///
    /// Boundaries must be non-empty and non-decreasing; the partitioning
    /// relies on the ordering and never sorts.
    pub fn new(boundaries: Vec<f64>) -> Result<Self> {
        if boundaries.is_empty() {
            return Err(Error::EmptyBoundaries);
        }
        if let Some(i) = boundaries.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::UnsortedBoundaries { index: i + 1 });
        }
        Ok(TemporalDataset {
            boundaries,
            samples: Vec::new(),
            stats: Vec::new(),
        })
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn samples(&self) -> &[TemporalSample] {
        &self.samples
    }

    /// Number of intervals: one more than the boundary count.
    pub fn num_intervals(&self) -> usize {
        self.boundaries.len() + 1
    }

    /// Append a sample. No validation happens here; dimensional
    /// consistency is checked by [`analyze`](Self::analyze).
    pub fn add_sample(&mut self, sample: TemporalSample) {
        self.samples.push(sample);
    }

    /// Interval id for a time: the smallest i with `time < boundaries[i]`,
    /// or the last interval when the time is at or past every boundary.
    pub fn interval_of(&self, time: f64) -> usize {
        self.boundaries.partition_point(|&b| time >= b)
    }

    /// Statistics table indexed `[interval][dimension]`. Empty until
    /// [`analyze`](Self::analyze) has run.
    pub fn stats(&self) -> &[Vec<DimStats>] {
        &self.stats
    }

    /// Recompute the statistics table from scratch.
    ///
    /// Dimensionality is taken from the first sample; a dataset with no
    /// samples, or a later sample with a different dimensionality, is an
    /// error.
    pub fn analyze(&mut self) -> Result<()> {
        let dims = match self.samples.first() {
            Some(s) => s.dims(),
            None => return Err(Error::EmptyDataset),
        };
        for (i, s) in self.samples.iter().enumerate() {
            if s.dims() != dims {
                return Err(Error::DimensionMismatch {
                    expected: dims,
                    actual: s.dims(),
                    sample: i,
                });
            }
        }

        let mut groups: Vec<Vec<&TemporalSample>> = vec![Vec::new(); self.num_intervals()];
        for s in &self.samples {
            groups[self.interval_of(s.time)].push(s);
        }

        let mut stats = Vec::with_capacity(groups.len());
        for group in &groups {
            let mut row = Vec::with_capacity(dims);
            for k in 0..dims {
                let column: Vec<f64> = group.iter().map(|s| s.values[k]).collect();
                row.push(match column.len() {
                    0 => DimStats::default(),
                    1 => DimStats {
                        count: 1,
                        mean: column[0],
                        std_dev: 0.0,
                    },
                    n => DimStats {
                        count: n,
                        mean: descriptive::mean(&column)?,
                        std_dev: descriptive::std_dev(&column)?,
                    },
                });
            }
            stats.push(row);
        }
        self.stats = stats;

        debug!(
            samples = self.samples.len(),
            intervals = self.num_intervals(),
            dims,
            "recomputed temporal statistics"
        );
        Ok(())
    }

    /// Human-readable label for an interval id.
    pub fn interval_label(&self, id: usize) -> String {
        let last = self.boundaries.len();
        if id == 0 {
            format!("(-inf,{})", self.boundaries[0])
        } else if id == last {
            format!("[{},inf)", self.boundaries[last - 1])
        } else {
            format!("[{},{})", self.boundaries[id - 1], self.boundaries[id])
        }
    }

    /// Representative time for an interval: the boundary value for the two
    /// open-ended intervals, the midpoint for interior ones.
    fn interval_time(&self, id: usize) -> f64 {
        let last = self.boundaries.len();
        if id == 0 {
            self.boundaries[0]
        } else if id == last {
            self.boundaries[last - 1]
        } else {
            0.5 * (self.boundaries[id - 1] + self.boundaries[id])
        }
    }

    /// Write the interval labels, one per line.
    pub fn write_intervals<W: Write>(&self, w: &mut W) -> Result<()> {
        for id in 0..self.num_intervals() {
            writeln!(w, "{}", self.interval_label(id))?;
        }
        Ok(())
    }

    /// Write one tab-separated line per interval: label, representative
    /// time, sample count, then a mean/std-dev pair per dimension.
    ///
    /// Writes nothing until [`analyze`](Self::analyze) has run.
    pub fn write_statistics<W: Write>(&self, w: &mut W) -> Result<()> {
        for (id, row) in self.stats.iter().enumerate() {
            let count = row.first().map_or(0, |s| s.count);
            write!(
                w,
                "{}\t{}\t{}",
                self.interval_label(id),
                self.interval_time(id),
                count
            )?;
            for cell in row {
                write!(w, "\t{}\t{}", cell.mean, cell.std_dev)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Diagnostic dump of the interval labels to standard output.
    pub fn print_intervals(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_intervals(&mut stdout.lock())
    }

    /// Diagnostic dump of the statistics table to standard output.
    pub fn print_statistics(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_statistics(&mut stdout.lock())
    }
}
