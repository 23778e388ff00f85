//! CLI for `swsc batch` (one design run per FASTA file in a directory).
//!
//! Runs are independent pure functions of their inputs, so clusters are
//! dispatched across a rayon worker pool; all file writing happens on the
//! main thread afterwards, in sorted input order.
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use swsc::*;

/// Options for the `batch` subcommand.
#[derive(Debug, Args)]
pub struct BatchCmd {
    /// Directory holding one cluster FASTA (.fasta/.fa) per file.
    #[arg(long, value_name="DIR")]
    pub indir: PathBuf,
    /// Directory receiving one library FASTA per cluster.
    #[arg(long, default_value=".")]
    pub outdir: PathBuf,
    /// Epitope (X-mer) size.
    #[arg(short='x', long, default_value_t=9)]
    pub x_size: usize,
    /// Peptide (Y-mer) size.
    #[arg(short='y', long, default_value_t=30)]
    pub y_size: usize,
    /// Sliding-window step.
    #[arg(long, default_value_t=1)]
    pub step: usize,
    /// Coverage fraction at which the set-cover phase stops.
    #[arg(long, default_value_t=1.0)]
    pub target: f64,
    /// Characters that disqualify a k-mer.
    #[arg(long, default_value="X-")]
    pub exclude: String,
    /// Replace C with S in sliding-window peptides instead of filtering them.
    #[arg(long, default_value_t=false)]
    pub cys_to_ser: bool,
    /// RNG seed for tie-breaking; every cluster uses the same seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Summary TSV (File / XmerThreshold / NumPeps).
    #[arg(long, default_value="swsc_summary.tsv")]
    pub summary: PathBuf,
    /// Optional combined FASTA concatenating every cluster's library.
    #[arg(long)]
    pub library: Option<PathBuf>,
}

pub fn run(cmd: BatchCmd) -> Result<()> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(&cmd.indir)
        .with_context(|| format!("read directory {}", cmd.indir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| matches!(p.extension().and_then(|e| e.to_str()), Some("fasta") | Some("fa")))
        .collect();
    files.sort();
    if files.is_empty() {
        anyhow::bail!("no .fasta/.fa files in {}", cmd.indir.display());
    }

    let params = DesignParams {
        x_size: cmd.x_size,
        y_size: cmd.y_size,
        step: cmd.step,
        target_fraction: cmd.target,
        exclude: cmd.exclude.clone(),
        sw_cys_to_ser: cmd.cys_to_ser,
        seed: cmd.seed,
    };

    let designs: Vec<(String, Design)> = files
        .par_iter()
        .map(|path| -> Result<(String, Design)> {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read FASTA: {}", path.display()))?;
            let records = parse_fasta(&text);
            let label = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("cluster")
                .to_string();
            let design = design_cluster(&label, &records, &params)?;
            Ok((label, design))
        })
        .collect::<Result<Vec<_>>>()?;

    std::fs::create_dir_all(&cmd.outdir)
        .with_context(|| format!("create outdir {}", cmd.outdir.display()))?;

    let mut summary = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(&cmd.summary)
        .with_context(|| format!("create summary {}", cmd.summary.display()))?;
    summary.write_record(["File", "XmerThreshold", "NumPeps"])?;

    let mut library_names: Vec<String> = Vec::new();
    let mut library_seqs: Vec<String> = Vec::new();
    for (label, design) in &designs {
        if let Some(diag) = &design.diagnostic {
            eprintln!("{}", diag);
        }
        if design.total() > 0 {
            let out = cmd.outdir.join(format!(
                "{}_SWSC-x{}-y{}-t{:.3}.fasta",
                label, cmd.x_size, cmd.y_size, cmd.target
            ));
            let mut f = File::create(&out).with_context(|| format!("create {}", out.display()))?;
            write_fasta(&mut f, &design.names, &design.peptides)?;
            library_names.extend(design.names.iter().cloned());
            library_seqs.extend(design.peptides.iter().cloned());
        }
        let threshold = format!("{:.3}", cmd.target);
        let n_peps = design.total().to_string();
        summary.write_record([label.as_str(), threshold.as_str(), n_peps.as_str()])?;
    }
    summary.flush()?;

    if let Some(path) = &cmd.library {
        let mut f = File::create(path).with_context(|| format!("create library {}", path.display()))?;
        write_fasta(&mut f, &library_names, &library_seqs)?;
    }
    Ok(())
}
