//! Common helpers shared by the design engine: minimal FASTA parsing and
//! writing, and the crate error type.
//!
//! ## FASTA
//! The parser is intentionally permissive and suitable for small/medium files
//! and tests. It supports multi-record inputs, joins continuation lines,
//! strips surrounding whitespace and uppercases residues. Gap (`-`) and
//! ambiguity (`X`) symbols are kept as-is; the design engine decides what to
//! do with them via its exclusion policy.
//!

/// Errors that can be returned by the design engine in this crate.
#[derive(thiserror::Error, Debug)]
pub enum SwscError {
    /// Returned if `x_size` is zero or `y_size` is not larger than `x_size`.
    #[error("invalid k-mer sizes: x={x_size}, y={y_size} (require 1 <= x < y)")]
    InvalidKmerSizes { x_size: usize, y_size: usize },
    /// Returned if the sliding-window step is zero.
    #[error("window step must be > 0 (step={step})")]
    InvalidStep { step: usize },
    /// Returned if the coverage target lies outside `0.0..=1.0`.
    #[error("coverage target must be within 0.0..=1.0 (target={target})")]
    InvalidTarget { target: f64 },
    /// Returned when sequence input is empty or otherwise invalid.
    #[error("invalid sequence input: {0}")]
    InvalidSequence(&'static str),
}

/// A single FASTA sequence (identifier and uppercase residue letters).
#[derive(Clone, Debug)]
pub struct FastaRecord {
    /// Identifier from the FASTA header (text after '>').
    pub id: String,
    /// Residues (uppercase). Non-amino-acid symbols are kept as-is.
    pub seq: String,
}

/// Parse a minimal FASTA string into a vector of [`FastaRecord`].
///
/// *Lines starting with `>` start a new record.* All other lines are appended
/// (without spaces) to the current sequence. Sequences are uppercased.
///
/// ## Examples
/// ```
/// use swsc::parse_fasta;
/// let recs = parse_fasta(">id\nAC\nDE\n");
/// assert_eq!(recs[0].id, "id");
/// assert_eq!(recs[0].seq, "ACDE");
/// ```
pub fn parse_fasta(text: &str) -> Vec<FastaRecord> {
    let mut out: Vec<FastaRecord> = vec![];
    let mut id = String::new();
    let mut seq = String::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            if !id.is_empty() { out.push(FastaRecord{ id: id.clone(), seq: seq.to_ascii_uppercase() }); seq.clear(); }
            id = rest.trim().split_whitespace().next().unwrap_or("").to_string();
        } else {
            seq.push_str(line.trim());
        }
    }
    if !id.is_empty() { out.push(FastaRecord{ id, seq: seq.to_ascii_uppercase() }); }
    out
}

/// Write records as `>name\nresidues\n` pairs (no line wrapping).
pub fn write_fasta<W: std::io::Write>(w: &mut W, names: &[String], seqs: &[String]) -> std::io::Result<()> {
    for (name, seq) in names.iter().zip(seqs) {
        writeln!(w, ">{}", name)?;
        writeln!(w, "{}", seq)?;
    }
    Ok(())
}
