//! Append-only record of selection events.
//!
//! One row per selected peptide, in commit order: all sliding-window rows
//! first (coverage recorded as the literal `0`), then one row per set-cover
//! pick carrying the coverage fraction measured *before* that peptide was
//! applied, to three decimal places. Values are rendered at append time so
//! the table is byte-stable however it is later written.
//!
use std::io;

/// One manifest row: peptide name and the rendered coverage value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestRow {
    /// Peptide name as it appears in the output FASTA.
    pub peptide: String,
    /// Coverage fraction prior to adding, already formatted.
    pub value: String,
}

/// Ordered selection record for one design run.
#[derive(Clone, Debug, Default)]
pub struct Manifest {
    rows: Vec<ManifestRow>,
}

impl Manifest {
    /// An empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sliding-window row (coverage `0` by convention).
    pub fn push_sliding(&mut self, peptide: &str) {
        self.rows.push(ManifestRow { peptide: peptide.to_string(), value: "0".to_string() });
    }

    /// Append a set-cover row with the coverage fraction measured before the
    /// peptide's X-mers were removed from the index.
    pub fn push_cover(&mut self, peptide: &str, coverage_before: f64) {
        self.rows.push(ManifestRow {
            peptide: peptide.to_string(),
            value: format!("{:.3}", coverage_before),
        });
    }

    /// Rows in commit order.
    pub fn rows(&self) -> &[ManifestRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the tab-separated table: header, then one row per peptide.
    pub fn write_tsv<W: io::Write>(&self, w: W) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_writer(w);
        wtr.write_record(["Peptide", "XmerPropPriorToAdding"])?;
        for row in &self.rows {
            wtr.write_record([&row.peptide, &row.value])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
