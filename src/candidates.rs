//! Pool of Y-mer candidate peptides for the set-cover phase.
//!
//! Every length-Y window of every target that passes the exclusion policy
//! enters the pool keyed by residue content, so identical Y-mers from
//! different targets collapse to one candidate (the last-seen name wins).
//! Scores are recomputed against the live [`KmerIndex`](crate::KmerIndex)
//! before each selection; the best-scoring candidate is drawn uniformly at
//! random from the tie set, which keeps runs reproducible under a fixed seed
//! because the tie set is ordered before the draw.
//!
use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::common::FastaRecord;
use crate::exclusion::ExclusionPolicy;
use crate::kmer_index::KmerIndex;

#[derive(Clone, Debug)]
struct Candidate {
    name: String,
    score: usize,
}

/// Candidate Y-mers keyed by residue content.
#[derive(Clone, Debug)]
pub struct CandidatePool {
    pool: HashMap<String, Candidate>,
}

impl CandidatePool {
    /// Record every accepted Y-window of every target as
    /// `{seq}_{offset:04}`. Duplicate residues overwrite (last write wins).
    pub fn populate(targets: &[&FastaRecord], y_size: usize, policy: &ExclusionPolicy) -> Self {
        let mut pool: HashMap<String, Candidate> = HashMap::new();
        for rec in targets {
            let n = rec.seq.len();
            if n < y_size { continue; }
            for j in 0..=n - y_size {
                let ymer = &rec.seq[j..j + y_size];
                if policy.accept(ymer) {
                    pool.insert(
                        ymer.to_string(),
                        Candidate { name: format!("{}_{:04}", rec.id, j), score: 0 },
                    );
                }
            }
        }
        Self { pool }
    }

    /// Number of candidates still in the pool.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// True when no candidates remain.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Rescore every candidate against `index` and draw one of the
    /// maximum-score candidates uniformly at random. Returns
    /// `(residues, name)`, or `None` when the pool is empty or no candidate
    /// scores above zero.
    pub fn choose<R: rand::Rng>(&mut self, index: &KmerIndex, rng: &mut R) -> Option<(String, String)> {
        let mut max = 0usize;
        for (residues, cand) in self.pool.iter_mut() {
            cand.score = index.score(residues);
            max = max.max(cand.score);
        }
        if max == 0 {
            return None;
        }
        let mut ties: Vec<&str> = self
            .pool
            .iter()
            .filter(|(_, c)| c.score == max)
            .map(|(residues, _)| residues.as_str())
            .collect();
        ties.sort_unstable();
        let chosen = (*ties.choose(rng)?).to_string();
        let name = self.pool[&chosen].name.clone();
        Some((chosen, name))
    }

    /// Delete a candidate by residue content.
    pub fn remove(&mut self, residues: &str) {
        self.pool.remove(residues);
    }
}
