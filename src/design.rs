//! Design orchestrator: one cluster in, one peptide library out.
//!
//! A design run is a pure function of the target sequences, the parameters
//! and the RNG seed. Phases run in a fixed order: length filtering, X-mer
//! index build, sliding-window tiling over the representative, candidate
//! pool population, then the greedy set-cover loop. Sliding-window peptides
//! always precede set-cover peptides in the output; set-cover peptides keep
//! their selection order.
//!
//! ### Example
//! ```
//! use swsc::{design_cluster, parse_fasta, DesignParams};
//! let recs = parse_fasta(">a\nACDEFGHIK\n");
//! let params = DesignParams { x_size: 3, y_size: 5, step: 2, ..Default::default() };
//! let design = design_cluster("a-cluster", &recs, &params).unwrap();
//! assert_eq!(design.total(), design.names.len());
//! ```
//!
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::candidates::CandidatePool;
use crate::common::{FastaRecord, SwscError};
use crate::cover::greedy_cover;
use crate::exclusion::ExclusionPolicy;
use crate::kmer_index::KmerIndex;
use crate::manifest::Manifest;
use crate::sliding::{pick_representative, sliding_phase};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 31415;

/// Parameters for one design run.
#[derive(Clone, Debug)]
pub struct DesignParams {
    /// Epitope substring size (X).
    pub x_size: usize,
    /// Peptide size (Y), strictly larger than X.
    pub y_size: usize,
    /// Sliding-window step.
    pub step: usize,
    /// Coverage fraction at which the set-cover loop stops, in `0.0..=1.0`.
    pub target_fraction: f64,
    /// Characters that disqualify a k-mer (default `X-`).
    pub exclude: String,
    /// Replace C with S in sliding-window peptides instead of filtering them.
    pub sw_cys_to_ser: bool,
    /// RNG seed; [`DEFAULT_SEED`] when absent.
    pub seed: Option<u64>,
}

impl Default for DesignParams {
    fn default() -> Self {
        Self {
            x_size: 9,
            y_size: 30,
            step: 1,
            target_fraction: 1.0,
            exclude: "X-".to_string(),
            sw_cys_to_ser: false,
            seed: None,
        }
    }
}

impl DesignParams {
    /// Reject parameter combinations the engine cannot run with.
    pub fn validate(&self) -> Result<(), SwscError> {
        if self.x_size == 0 || self.y_size <= self.x_size {
            return Err(SwscError::InvalidKmerSizes { x_size: self.x_size, y_size: self.y_size });
        }
        if self.step == 0 {
            return Err(SwscError::InvalidStep { step: self.step });
        }
        if !(0.0..=1.0).contains(&self.target_fraction) {
            return Err(SwscError::InvalidTarget { target: self.target_fraction });
        }
        Ok(())
    }

    fn policy(&self) -> ExclusionPolicy {
        ExclusionPolicy::new(&self.exclude, self.sw_cys_to_ser)
    }
}

/// The peptide library designed for one cluster.
#[derive(Clone, Debug)]
pub struct Design {
    /// Peptide names: sliding-window block (sorted), then set-cover block
    /// (selection order).
    pub names: Vec<String>,
    /// Residues, parallel to `names`.
    pub peptides: Vec<String>,
    /// Number of sliding-window peptides at the front of the vectors.
    pub sw_count: usize,
    /// Number of set-cover peptides at the back.
    pub sc_count: usize,
    /// One row per peptide, in commit order.
    pub manifest: Manifest,
    /// Empty-cluster or unreachable-target message, if either occurred.
    pub diagnostic: Option<String>,
}

impl Design {
    /// Total number of peptides in the library.
    pub fn total(&self) -> usize {
        self.names.len()
    }

    fn empty(diagnostic: Option<String>) -> Self {
        Self {
            names: Vec::new(),
            peptides: Vec::new(),
            sw_count: 0,
            sc_count: 0,
            manifest: Manifest::new(),
            diagnostic,
        }
    }
}

/// Design a peptide library for one cluster of related targets.
///
/// `label` names the cluster in diagnostics only; it does not affect the
/// design. Targets shorter than Y are dropped up front; if none survive the
/// run reports `no peptides designed for {label}` and yields an empty
/// library.
pub fn design_cluster(label: &str, targets: &[FastaRecord], params: &DesignParams) -> Result<Design, SwscError> {
    params.validate()?;
    let kept: Vec<&FastaRecord> = targets.iter().filter(|r| r.seq.len() >= params.y_size).collect();
    if kept.is_empty() {
        return Ok(Design::empty(Some(format!("no peptides designed for {}", label))));
    }

    let policy = params.policy();
    let mut index = KmerIndex::build(&kept, params.x_size, &policy);

    // representative weights use build-time counts, before any covers
    let rep = pick_representative(&kept, &index).expect("non-empty cluster");
    let sw = sliding_phase(rep, &policy, params.y_size, params.step);

    let mut manifest = Manifest::new();
    for p in &sw {
        manifest.push_sliding(&p.name);
        index.cover(&p.residues);
    }

    let mut pool = CandidatePool::populate(&kept, params.y_size, &policy);
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed.unwrap_or(DEFAULT_SEED));
    let sc = greedy_cover(&mut index, &mut pool, params.target_fraction, &mut rng, &mut manifest);

    let mut names: Vec<String> = sw.iter().map(|p| p.name.clone()).collect();
    let mut peptides: Vec<String> = sw.iter().map(|p| p.residues.clone()).collect();
    let sw_count = names.len();
    let sc_count = sc.picked.len();
    for (name, residues) in sc.picked {
        names.push(name);
        peptides.push(residues);
    }

    Ok(Design { names, peptides, sw_count, sc_count, manifest, diagnostic: sc.diagnostic })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::parse_fasta;

    fn params(x: usize, y: usize, step: usize, target: f64) -> DesignParams {
        DesignParams { x_size: x, y_size: y, step, target_fraction: target, ..Default::default() }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(params(5, 5, 1, 1.0).validate().is_err());
        assert!(params(0, 5, 1, 1.0).validate().is_err());
        assert!(params(3, 5, 0, 1.0).validate().is_err());
        assert!(params(3, 5, 1, 1.5).validate().is_err());
        assert!(params(3, 5, 1, 1.0).validate().is_ok());
    }

    #[test]
    fn single_sequence_full_cover() {
        // Windows at 0 and 2 only (strict loop bound, tail rule silent);
        // FGHIK alone holds the two remaining X-mers.
        let recs = parse_fasta(">a\nACDEFGHIK\n");
        let d = design_cluster("c1", &recs, &params(3, 5, 2, 1.0)).unwrap();
        assert_eq!(d.names, ["a_000_005", "a_002_007", "a_0004"]);
        assert_eq!(d.peptides, ["ACDEF", "DEFGH", "FGHIK"]);
        assert_eq!((d.sw_count, d.sc_count), (2, 1));
        assert!(d.diagnostic.is_none());
        let mut buf = Vec::new();
        d.manifest.write_tsv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Peptide\tXmerPropPriorToAdding\na_000_005\t0\na_002_007\t0\na_0004\t0.714\n"
        );
    }

    #[test]
    fn ambiguous_windows_skipped_and_target_respected() {
        let recs = parse_fasta(">a\nACDEFXHIKDEFAC\n");
        let d = design_cluster("c1", &recs, &params(3, 5, 1, 0.5)).unwrap();
        for p in &d.peptides {
            assert!(!p.contains('X'));
        }
        for row in d.manifest.rows().iter().take(d.sw_count) {
            assert_eq!(row.value, "0");
        }
    }

    #[test]
    fn identical_sequences_collapse() {
        let one = parse_fasta(">a\nACDEFGHIK\n");
        let two = parse_fasta(">a\nACDEFGHIK\n>a2\nACDEFGHIK\n");
        let p = params(3, 5, 2, 1.0);
        let d1 = design_cluster("c", &one, &p).unwrap();
        let d2 = design_cluster("c", &two, &p).unwrap();
        // representative is the first; the pool dedupes shared Y-mers, but
        // last-write-wins renames the set-cover pick
        assert_eq!(d1.peptides, d2.peptides);
        assert_eq!(d1.sw_count, d2.sw_count);
        assert_eq!(d2.names[..d2.sw_count], d1.names[..d1.sw_count]);
    }

    #[test]
    fn homopolymer_needs_no_set_cover() {
        let recs = parse_fasta(&format!(">a\n{}\n", "A".repeat(100)));
        let d = design_cluster("c", &recs, &params(9, 30, 1, 1.0)).unwrap();
        // one distinct 30-mer after dedup covers the single distinct 9-mer
        assert_eq!(d.sw_count, 1);
        assert_eq!(d.sc_count, 0);
        assert!(d.diagnostic.is_none());
    }

    #[test]
    fn empty_cluster_diagnostic() {
        let recs = parse_fasta(">short\nACDE\n");
        let d = design_cluster("tiny", &recs, &params(3, 5, 1, 1.0)).unwrap();
        assert_eq!(d.total(), 0);
        assert!(d.manifest.is_empty());
        assert_eq!(d.diagnostic.as_deref(), Some("no peptides designed for tiny"));
    }

    #[test]
    fn length_equals_y_emits_whole_sequence() {
        let recs = parse_fasta(">a\nACDEF\n");
        let d = design_cluster("c", &recs, &params(3, 5, 1, 0.0)).unwrap();
        assert_eq!(d.names, ["a_000_005"]);
        assert_eq!(d.peptides, ["ACDEF"]);
    }

    #[test]
    fn zero_target_is_sliding_window_only() {
        let recs = parse_fasta(">a\nACDEFGHIKLMNPQ\n");
        let d = design_cluster("c", &recs, &params(3, 5, 2, 0.0)).unwrap();
        assert!(d.sw_count > 0);
        assert_eq!(d.sc_count, 0);
    }

    #[test]
    fn cys_to_ser_applies_to_sliding_block_only() {
        let recs = parse_fasta(">a\nACCDEFGHCKLMN\n");
        let mut p = params(3, 5, 2, 1.0);
        p.sw_cys_to_ser = true;
        let d = design_cluster("c", &recs, &p).unwrap();
        assert!(d.sw_count > 0);
        for pep in &d.peptides[..d.sw_count] {
            assert!(!pep.contains('C'));
        }
        // the set-cover block keeps cysteines
        assert!(d.peptides[d.sw_count..].iter().any(|pep| pep.contains('C')));
    }

    #[test]
    fn same_seed_reproduces_byte_identical_output() {
        let recs = parse_fasta(">a\nMKVLAACDEFGHIKLMNPQRSTVWYAACDE\n>b\nMKVLAACDEFGHIKLMNPQRSTVWYAACDF\n");
        let mut p = params(4, 8, 3, 1.0);
        p.seed = Some(99);
        let d1 = design_cluster("c", &recs, &p).unwrap();
        let d2 = design_cluster("c", &recs, &p).unwrap();
        assert_eq!(d1.names, d2.names);
        assert_eq!(d1.peptides, d2.peptides);
        let render = |d: &Design| {
            let mut buf = Vec::new();
            d.manifest.write_tsv(&mut buf).unwrap();
            buf
        };
        assert_eq!(render(&d1), render(&d2));
    }

    #[test]
    fn manifest_has_one_row_per_peptide() {
        let recs = parse_fasta(">a\nACDEFGHIKLMNPQRST\n");
        let d = design_cluster("c", &recs, &params(3, 6, 2, 1.0)).unwrap();
        assert_eq!(d.manifest.len(), d.total());
        assert_eq!(d.sw_count + d.sc_count, d.total());
    }

    #[test]
    fn coverage_values_non_decreasing_in_manifest() {
        let recs = parse_fasta(">a\nACDEFGHIKLMNPQRSTVWY\n");
        let d = design_cluster("c", &recs, &params(3, 5, 4, 1.0)).unwrap();
        let mut last = 0.0f64;
        for row in d.manifest.rows().iter().skip(d.sw_count) {
            let v: f64 = row.value.parse().unwrap();
            assert!(v >= last);
            last = v;
        }
    }
}
