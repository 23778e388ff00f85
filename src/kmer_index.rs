//! Index of uncovered X-mers across the target cluster.
//!
//! The index is built once per design run: every length-X window of every
//! target that passes the exclusion policy is counted, and the number of
//! distinct X-mers at that point (`total_x`) is frozen as the denominator for
//! coverage reporting. From then on the map plays two roles at once: the
//! counts drive candidate scoring, while key presence records which X-mers
//! are still uncovered. Covering a peptide deletes keys; it never decrements.
//!
//! ### Example
//! ```
//! use swsc::{ExclusionPolicy, FastaRecord, KmerIndex};
//! let recs = vec![FastaRecord{ id: "a".into(), seq: "ACDEF".into() }];
//! let refs: Vec<&FastaRecord> = recs.iter().collect();
//! let mut ix = KmerIndex::build(&refs, 3, &ExclusionPolicy::default());
//! assert_eq!(ix.total_x(), 3);
//! ix.cover("ACDE");
//! assert_eq!(ix.remaining(), 1); // DEF survives
//! ```
//!
use std::collections::HashMap;

use crate::common::FastaRecord;
use crate::exclusion::ExclusionPolicy;

/// Live set of uncovered X-mers with their build-time occurrence counts.
#[derive(Clone, Debug)]
pub struct KmerIndex {
    counts: HashMap<String, usize>,
    x_size: usize,
    total_x: usize,
}

impl KmerIndex {
    /// Count every accepted length-X window across `targets` and freeze the
    /// distinct-X-mer total.
    pub fn build(targets: &[&FastaRecord], x_size: usize, policy: &ExclusionPolicy) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for rec in targets {
            let bytes = rec.seq.as_bytes();
            if bytes.len() < x_size { continue; }
            for i in 0..=bytes.len() - x_size {
                let xmer = &rec.seq[i..i + x_size];
                if policy.accept(xmer) {
                    *counts.entry(xmer.to_string()).or_insert(0) += 1;
                }
            }
        }
        let total_x = counts.len();
        Self { counts, x_size, total_x }
    }

    /// The distinct-X-mer universe size recorded at build time.
    pub fn total_x(&self) -> usize {
        self.total_x
    }

    /// Number of X-mers not yet covered.
    pub fn remaining(&self) -> usize {
        self.counts.len()
    }

    /// Fraction of the build-time universe covered so far. An empty universe
    /// counts as fully covered.
    pub fn coverage_fraction(&self) -> f64 {
        if self.total_x == 0 {
            return 1.0;
        }
        1.0 - self.remaining() as f64 / self.total_x as f64
    }

    /// Delete every X-mer substring of `peptide` from the index.
    pub fn cover(&mut self, peptide: &str) {
        let n = peptide.len();
        if n < self.x_size { return; }
        for i in 0..=n - self.x_size {
            self.counts.remove(&peptide[i..i + self.x_size]);
        }
    }

    /// Sum of the current counts of every X-mer window of `residues`.
    /// Windows absent from the index contribute 0; a window occurring twice
    /// in `residues` is summed twice.
    pub fn score(&self, residues: &str) -> usize {
        let n = residues.len();
        if n < self.x_size { return 0; }
        let mut total = 0usize;
        for i in 0..=n - self.x_size {
            if let Some(c) = self.counts.get(&residues[i..i + self.x_size]) {
                total += c;
            }
        }
        total
    }

    /// Drop every remaining X-mer. Used to force SC-loop termination when no
    /// candidate can make further progress.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
