//! Forbidden-character policy for k-mers and peptides.
//!
//! The design engine never tiles across alignment gaps (`-`) or ambiguous
//! residues (`X` by default): any k-mer containing a forbidden character is
//! rejected outright rather than scored. The sliding-window phase can instead
//! be asked to rewrite cysteines to serines, which is common when the
//! synthesized peptides must avoid disulfide bonding; in that mode the
//! forbidden-character filter is *not* applied to sliding-window output (the
//! two treatments are mutually exclusive).
//!

/// Character rules applied to every k-mer and candidate peptide.
#[derive(Clone, Debug)]
pub struct ExclusionPolicy {
    forbidden: Vec<u8>,
    /// Replace 'C' with 'S' in sliding-window peptides instead of filtering
    /// them on forbidden characters.
    pub sw_cys_to_ser: bool,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self { forbidden: vec![b'X', b'-'], sw_cys_to_ser: false }
    }
}

impl ExclusionPolicy {
    /// Build a policy from a set of forbidden characters.
    pub fn new(forbidden: &str, sw_cys_to_ser: bool) -> Self {
        Self { forbidden: forbidden.bytes().collect(), sw_cys_to_ser }
    }

    /// True iff `kmer` contains none of the forbidden characters.
    pub fn accept(&self, kmer: &str) -> bool {
        !kmer.bytes().any(|b| self.forbidden.contains(&b))
    }

    /// Sliding-window transformation: 'C' becomes 'S' when enabled,
    /// otherwise the residues pass through unchanged.
    pub fn sw_transform(&self, residues: &str) -> String {
        if self.sw_cys_to_ser {
            residues.replace('C', "S")
        } else {
            residues.to_string()
        }
    }
}
