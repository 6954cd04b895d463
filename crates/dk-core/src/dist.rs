//! Labeled discrete probability distributions with dual linear/log storage.

use std::fmt::Display;
use std::io::Write;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use dk_math::math::{sample, stable};

/// Probabilities below this contribute zero to the entropy sum.
const ENTROPY_MASS_CUTOFF: f64 = 1e-10;

/// A discrete distribution over a finite set of labeled outcomes.
///
/// Three parallel vectors are kept: linear probabilities `p`, log
/// probabilities `lp`, and the outcome `labels`. The linear and log views
/// are *explicitly* synchronized: [`normalize`](Self::normalize),
/// [`log_normalize`](Self::log_normalize), [`sort_by_prob`](Self::sort_by_prob),
/// and [`randomize`](Self::randomize) leave both consistent, but mutating
/// one view through [`p_mut`](Self::p_mut) or [`lp_mut`](Self::lp_mut)
/// leaves the other stale until the matching conversion
/// ([`p_to_lp`](Self::p_to_lp) or [`lp_to_p`](Self::lp_to_p)) is called.
/// That hazard is part of the contract, not checked at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbDist<T> {
    p: Vec<f64>,
    lp: Vec<f64>,
    labels: Vec<T>,
}

impl<T> Default for ProbDist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ProbDist<T> {
    /// An empty distribution.
    pub fn new() -> Self {
        ProbDist {
            p: Vec::new(),
            lp: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Drop all outcomes.
    pub fn clear(&mut self) {
        self.p.clear();
        self.lp.clear();
        self.labels.clear();
    }

    /// Linear probabilities, in outcome order.
    pub fn p(&self) -> &[f64] {
        &self.p
    }

    /// Log probabilities, in outcome order.
    pub fn lp(&self) -> &[f64] {
        &self.lp
    }

    /// Outcome labels, in outcome order.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Mutable view of the linear probabilities.
    ///
    /// Leaves `lp` stale; call [`p_to_lp`](Self::p_to_lp) (or
    /// [`normalize`](Self::normalize)) when done.
    pub fn p_mut(&mut self) -> &mut [f64] {
        &mut self.p
    }

    /// Mutable view of the log probabilities.
    ///
    /// Leaves `p` stale; call [`lp_to_p`](Self::lp_to_p) (or
    /// [`log_normalize`](Self::log_normalize)) when done.
    pub fn lp_mut(&mut self) -> &mut [f64] {
        &mut self.lp
    }

    /// Mutable view of the labels.
    pub fn labels_mut(&mut self) -> &mut [T] {
        &mut self.labels
    }

    /// Recompute `lp` element-wise as `ln(p)`.
    pub fn p_to_lp(&mut self) {
        self.lp.clear();
        self.lp.extend(self.p.iter().map(|&p| p.ln()));
    }

    /// Recompute `p` element-wise as `exp(lp)`.
    pub fn lp_to_p(&mut self) {
        self.p.clear();
        self.p.extend(self.lp.iter().map(|&lp| lp.exp()));
    }

    /// Linear-normalize `p` in place, then rebuild `lp` from it.
    pub fn normalize(&mut self) -> Result<()> {
        stable::normalize(&mut self.p)?;
        self.p_to_lp();
        Ok(())
    }

    /// Log-normalize `lp` in place (with the saturation floor), then
    /// rebuild `p` from it.
    pub fn log_normalize(&mut self) -> Result<()> {
        stable::log_normalize(&mut self.lp)?;
        self.lp_to_p();
        Ok(())
    }

    /// Draw an outcome label according to `p`.
    ///
    /// Requires `p` to be a valid probability vector (normalized,
    /// non-negative); sampling an unnormalized distribution is undefined.
    ///
    /// # Panics
    ///
    /// Panics if the distribution is empty.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &T {
        debug_assert_eq!(self.p.len(), self.labels.len());
        &self.labels[sample::categorical(rng, &self.p)]
    }

    /// The largest linear probability, or `None` when empty.
    pub fn max_p(&self) -> Option<f64> {
        self.p.iter().cloned().reduce(f64::max)
    }

    /// Index of the highest-probability outcome, first occurrence on ties.
    pub fn mode_id(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &pi) in self.p.iter().enumerate() {
            match best {
                Some((_, max)) if pi <= max => {}
                _ => best = Some((i, pi)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Replace `p` with uniform random weights and normalize.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        for pi in self.p.iter_mut() {
            *pi = sample::uniform(rng);
        }
        self.normalize()
    }

    /// Reorder outcomes by descending probability.
    ///
    /// The sort is stable, so equal probabilities keep their original
    /// relative order. Labels move with their probabilities and `lp` is
    /// rebuilt afterward.
    pub fn sort_by_prob(&mut self) {
        debug_assert_eq!(self.p.len(), self.labels.len());
        let mut entries: Vec<(f64, T)> = self.p.drain(..).zip(self.labels.drain(..)).collect();
        entries.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        for (pi, label) in entries {
            self.p.push(pi);
            self.labels.push(label);
        }
        self.p_to_lp();
    }

    /// Shannon entropy over `p`, in nats.
    ///
    /// Entries below a small cutoff contribute zero, so freshly zeroed or
    /// floored outcomes do not produce NaN.
    pub fn entropy(&self) -> f64 {
        self.p
            .iter()
            .filter(|&&pi| pi >= ENTROPY_MASS_CUTOFF)
            .map(|&pi| -pi * pi.ln())
            .sum()
    }
}

impl<T: Default> ProbDist<T> {
    /// Reset to `n` outcomes: probabilities zeroed, labels
    /// default-initialized. Prior content is discarded.
    pub fn with_len(n: usize) -> Self {
        ProbDist {
            p: vec![0.0; n],
            lp: vec![0.0; n],
            labels: std::iter::repeat_with(T::default).take(n).collect(),
        }
    }

    /// Reset to `n` outcomes with every linear probability set to `value`.
    ///
    /// `lp` is left zeroed: callers normalize (or call
    /// [`p_to_lp`](Self::p_to_lp)) before using the log view.
    pub fn filled(n: usize, value: f64) -> Self {
        ProbDist {
            p: vec![value; n],
            lp: vec![0.0; n],
            labels: std::iter::repeat_with(T::default).take(n).collect(),
        }
    }
}

impl<T: Display> ProbDist<T> {
    /// Write the distribution as tab-separated lines:
    /// `index TAB label TAB p TAB lp`, one outcome per line.
    pub fn write_tsv<W: Write>(&self, w: &mut W) -> Result<()> {
        for (i, label) in self.labels.iter().enumerate() {
            writeln!(w, "{}\t{}\t{}\t{}", i, label, self.p[i], self.lp[i])?;
        }
        Ok(())
    }

    /// Diagnostic dump of the distribution to standard output.
    pub fn print(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_tsv(&mut stdout.lock())
    }
}
