//! CLI for `swsc design` (one cluster in, one library FASTA out).
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use swsc::*;

/// Options for the `design` subcommand.
#[derive(Debug, Args)]
pub struct DesignCmd {
    /// Input FASTA files. If omitted, reads FASTA from stdin.
    #[arg(long, value_name="FILES", num_args=1.., value_delimiter=' ')]
    pub sequence: Option<Vec<PathBuf>>,
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
    /// RNG seed for tie-breaking (fixed default when omitted).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output FASTA path. Derived as
    /// `{base}_SWSC-x{X}-y{Y}-t{target:.3}.fasta` when omitted.
    #[arg(long)]
    pub outfile: Option<PathBuf>,
    /// Optional manifest TSV path (one row per selected peptide).
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(cmd: DesignCmd) -> Result<()> {
    // Read sequences from files or stdin
    let fasta_text = if let Some(files) = &cmd.sequence {
        let mut buf = String::new();
        for p in files {
            let mut s = String::new();
            File::open(p).with_context(|| format!("open FASTA: {}", p.display()))?.read_to_string(&mut s)?;
            buf.push_str(&s);
            if !s.ends_with('\n') { buf.push('\n'); }
        }
        buf
    } else {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    };

    let records = parse_fasta(&fasta_text);
    if records.is_empty() {
        anyhow::bail!("no FASTA records found");
    }

    let label = cmd
        .sequence
        .as_ref()
        .and_then(|files| files.first())
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("library")
        .to_string();

    let params = DesignParams {
        x_size: cmd.x_size,
        y_size: cmd.y_size,
        step: cmd.step,
        target_fraction: cmd.target,
        exclude: cmd.exclude.clone(),
        sw_cys_to_ser: cmd.cys_to_ser,
        seed: cmd.seed,
    };
    let design = design_cluster(&label, &records, &params)?;

    if let Some(diag) = &design.diagnostic {
        eprintln!("{}", diag);
    }
    if design.total() == 0 {
        return Ok(());
    }

    let outfile = cmd.outfile.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}_SWSC-x{}-y{}-t{:.3}.fasta",
            label, cmd.x_size, cmd.y_size, cmd.target
        ))
    });
    let mut f = File::create(&outfile).with_context(|| format!("create {}", outfile.display()))?;
    write_fasta(&mut f, &design.names, &design.peptides)?;

    if let Some(path) = &cmd.manifest {
        let f = File::create(path).with_context(|| format!("create manifest {}", path.display()))?;
        design.manifest.write_tsv(f)?;
    }
    Ok(())
}
