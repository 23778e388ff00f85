//! # swsc
//!
//! Sliding-window + set-cover (SW+SC) design of peptide libraries.
//!
//! Given one cluster of related protein sequences, the engine selects a
//! minimal set of length-Y peptides ("oligos") that together cover as many
//! distinct length-X subsequences (potential linear epitopes) as possible.
//! Two phases run per cluster:
//!
//! 1. **Sliding window**: a representative sequence is chosen by summed
//!    X-mer weight and tiled with Y-wide windows at a fixed step.
//! 2. **Set cover**: remaining X-mers are covered greedily, each round
//!    picking a candidate Y-mer with the maximal residual score (ties broken
//!    uniformly at random under a seedable RNG) until a coverage target is
//!    reached.
//!
//! A design run is a pure function of its inputs and seed: no I/O happens in
//! the library, and identical inputs with an identical seed reproduce the
//! library byte for byte. File handling lives in the `swsc` binary.
//!
//! ### Example
//! ```
//! use swsc::{design_cluster, parse_fasta, DesignParams};
//! let targets = parse_fasta(">a\nACDEFGHIK\n");
//! let params = DesignParams { x_size: 3, y_size: 5, step: 2, ..Default::default() };
//! let design = design_cluster("demo", &targets, &params).unwrap();
//! assert_eq!(design.peptides, ["ACDEF", "DEFGH", "FGHIK"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod candidates;
pub mod common;
pub mod cover;
pub mod design;
pub mod exclusion;
pub mod kmer_index;
pub mod manifest;
pub mod sliding;

pub use candidates::CandidatePool;
pub use common::{parse_fasta, write_fasta, FastaRecord, SwscError};
pub use cover::{greedy_cover, CoverOutcome};
pub use design::{design_cluster, Design, DesignParams, DEFAULT_SEED};
pub use exclusion::ExclusionPolicy;
pub use kmer_index::KmerIndex;
pub use manifest::{Manifest, ManifestRow};
pub use sliding::{pick_representative, sliding_phase, tile_windows, SwPeptide};
