//! Labeled sequences: an ordered residue-index array plus string labels.

use crate::alphabet::Alphabet;
use anyhow::Result;

const UNDEFINED_LABEL: &str = "undefined";

/// A sequence as a validated residue-index array with associated labels.
///
/// Label 0 is the sequence name, label 1 its class; missing labels read as
/// `"undefined"`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    residues: Vec<u8>,
    labels: Vec<String>,
}

impl Sequence {
    pub fn new(residues: Vec<u8>, labels: Vec<String>) -> Self {
        Self { residues, labels }
    }

    /// Encode a residue string through `alphabet`, keeping the given labels.
    pub fn from_residues(
        residues: &str,
        labels: Vec<String>,
        alphabet: &Alphabet,
    ) -> Result<Self> {
        Ok(Self {
            residues: alphabet.encode(residues)?,
            labels,
        })
    }

    pub fn residue_indices(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn label(&self, i: usize) -> &str {
        self.labels.get(i).map(String::as_str).unwrap_or(UNDEFINED_LABEL)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn name(&self) -> &str {
        self.label(0)
    }

    pub fn class_name(&self) -> &str {
        self.label(1)
    }
}
