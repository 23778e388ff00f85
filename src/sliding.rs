//! Sliding-window phase: pick one representative target and tile peptides
//! across it.
//!
//! The representative is the target whose residues carry the highest summed
//! X-mer count in the freshly built [`KmerIndex`](crate::KmerIndex); ties go
//! to the earliest target in input order. A fixed-width window of length Y is
//! then slid across the representative at the configured step. The loop
//! condition is `start + Y < |r|` (strict), so a final flush window is only
//! produced by the tail rule below; when the step divides the length exactly,
//! the last full window is dropped. This mirrors the reference procedure and
//! is relied on by downstream coordinate parsing.
//!
//! ### Tail rule
//! After a window is emitted at `start`, if the leftover suffix is shorter
//! than one step (but non-empty), the terminal window `r[|r|-Y..]` is emitted
//! as well so the C-terminus is represented.
//!
//! ### Post-processing
//! Emitted windows are either rewritten C to S (`sw_cys_to_ser`) or filtered
//! on forbidden characters, never both; then deduplicated by residue content
//! and sorted by name.
//!
use std::collections::HashMap;

use crate::common::FastaRecord;
use crate::exclusion::ExclusionPolicy;
use crate::kmer_index::KmerIndex;

/// One sliding-window peptide with its coordinate-bearing name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwPeptide {
    /// `{seq}_{start:03}_{end:03}` over the representative's residues.
    pub name: String,
    /// Window residues (after any post-processing).
    pub residues: String,
}

/// Pick the target with the maximum summed X-mer count. Ties resolve to the
/// first in input order; `None` only for an empty slice.
pub fn pick_representative<'a>(targets: &[&'a FastaRecord], index: &KmerIndex) -> Option<&'a FastaRecord> {
    let mut best: Option<(&'a FastaRecord, usize)> = None;
    for &rec in targets {
        let weight = index.score(&rec.seq);
        match best {
            Some((_, w)) if weight <= w => {}
            _ => best = Some((rec, weight)),
        }
    }
    best.map(|(rec, _)| rec)
}

/// Tile raw Y-windows across `residues` (no post-processing).
///
/// A sequence no longer than Y yields itself as a single peptide unless it
/// contains 'X'. Windows containing 'X' or '-' are skipped.
pub fn tile_windows(id: &str, residues: &str, y_size: usize, step: usize) -> Vec<SwPeptide> {
    let n = residues.len();
    let mut out: Vec<SwPeptide> = Vec::new();
    if n <= y_size {
        if !residues.contains('X') {
            out.push(SwPeptide {
                name: format!("{}_000_{:03}", id, n),
                residues: residues.to_string(),
            });
        }
        return out;
    }
    let mut start = 0usize;
    while start + y_size < n {
        let window = &residues[start..start + y_size];
        if !window.contains('X') && !window.contains('-') {
            out.push(SwPeptide {
                name: format!("{}_{:03}_{:03}", id, start, start + y_size),
                residues: window.to_string(),
            });
            let suffix = n - (start + y_size);
            if suffix > 0 && suffix < step {
                out.push(SwPeptide {
                    name: format!("{}_{:03}_{:03}", id, n - y_size, n),
                    residues: residues[n - y_size..].to_string(),
                });
            }
        }
        start += step;
    }
    out
}

/// Run the full sliding-window phase over the representative: tile, apply the
/// C-to-S substitution or the forbidden-character filter, deduplicate by
/// residue content (last name wins) and sort by name.
pub fn sliding_phase(rep: &FastaRecord, policy: &ExclusionPolicy, y_size: usize, step: usize) -> Vec<SwPeptide> {
    let tiled = tile_windows(&rep.id, &rep.seq, y_size, step);
    let mut dedup: HashMap<String, String> = HashMap::new();
    for p in tiled {
        if policy.sw_cys_to_ser {
            dedup.insert(policy.sw_transform(&p.residues), p.name);
        } else if policy.accept(&p.residues) {
            dedup.insert(p.residues, p.name);
        }
    }
    let mut out: Vec<SwPeptide> = dedup
        .into_iter()
        .map(|(residues, name)| SwPeptide { name, residues })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}
