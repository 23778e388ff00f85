//! Command-line interface for the `swsc` crate.
//!
//! Subcommands are implemented in separate files (modules) under `src/bin/swsc/`:
//! - `design_cmd.rs`
//! - `batch_cmd.rs`
//!
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name="swsc", version=env!("CARGO_PKG_VERSION"), about="Sliding-window + set-cover design of peptide libraries", disable_help_subcommand=true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Design a peptide library for one cluster FASTA.
    Design(design_cmd::DesignCmd),
    /// Design libraries for every cluster FASTA in a directory.
    Batch(batch_cmd::BatchCmd),
}

#[path = "swsc/design_cmd.rs"] mod design_cmd;
#[path = "swsc/batch_cmd.rs"] mod batch_cmd;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Design(cmd) => design_cmd::run(cmd),
        Command::Batch(cmd) => batch_cmd::run(cmd),
    }
}
