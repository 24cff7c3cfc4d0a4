//! Residue alphabets and the residue character <-> index mapping.
//!
//! The alignment and search code never looks at characters; sequences are
//! arrays of small indices in `[0, sigma)`. An `Alphabet` owns the mapping
//! in both directions and validates input at the ingestion boundary.

use anyhow::{anyhow, Result};

/// DNA without ambiguity codes.
pub const DNA_RESIDUES: &str = "acgt";
/// DNA with the `n` wildcard.
pub const DNA_WITH_N_RESIDUES: &str = "acgtn";
/// RNA without ambiguity codes.
pub const RNA_RESIDUES: &str = "acgu";
/// Amino acids in scoring-matrix row order, including B/Z ambiguity codes,
/// selenocysteine (U) and unknown (X).
pub const AMINO_RESIDUES: &str = "ARNDBCQEZGHILKMFPSTWYVUX";

/// Mapping between residue characters and residue indices.
///
/// Matching is case-insensitive; decoding always produces the canonical
/// case the alphabet was defined with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    residues: Vec<u8>,
    // ASCII byte -> index + 1, 0 = not in alphabet
    index_lut: [u8; 128],
}

impl Alphabet {
    pub fn new(residues: &str) -> Self {
        let residues: Vec<u8> = residues.bytes().collect();
        assert!(
            residues.len() < 128,
            "alphabet too large: {} residues",
            residues.len()
        );
        let mut index_lut = [0u8; 128];
        for (i, &r) in residues.iter().enumerate() {
            assert!(r.is_ascii(), "non-ASCII residue character");
            let idx = (i + 1) as u8;
            index_lut[r.to_ascii_lowercase() as usize] = idx;
            index_lut[r.to_ascii_uppercase() as usize] = idx;
        }
        Self { residues, index_lut }
    }

    pub fn dna() -> Self {
        Self::new(DNA_RESIDUES)
    }

    pub fn dna_with_n() -> Self {
        Self::new(DNA_WITH_N_RESIDUES)
    }

    pub fn rna() -> Self {
        Self::new(RNA_RESIDUES)
    }

    pub fn amino() -> Self {
        Self::new(AMINO_RESIDUES)
    }

    /// Alphabet size.
    pub fn sigma(&self) -> usize {
        self.residues.len()
    }

    /// Index of a residue character, if it belongs to the alphabet.
    #[inline]
    pub fn index(&self, residue: char) -> Option<u8> {
        if !residue.is_ascii() {
            return None;
        }
        match self.index_lut[residue as usize] {
            0 => None,
            i => Some(i - 1),
        }
    }

    /// Displayable character for a residue index.
    #[inline]
    pub fn residue(&self, index: u8) -> char {
        self.residues[index as usize] as char
    }

    #[inline]
    pub fn valid_index(&self, index: u8) -> bool {
        (index as usize) < self.sigma()
    }

    /// True iff every character of `residues` belongs to this alphabet.
    pub fn valid_residues(&self, residues: &str) -> bool {
        residues.chars().all(|c| self.index(c).is_some())
    }

    /// Encode a residue string to an index array, rejecting foreign characters.
    pub fn encode(&self, residues: &str) -> Result<Vec<u8>> {
        residues
            .chars()
            .map(|c| {
                self.index(c)
                    .ok_or_else(|| anyhow!("residue '{}' not in alphabet", c))
            })
            .collect()
    }

    /// Decode an index array back to canonical residue characters.
    pub fn decode(&self, indices: &[u8]) -> String {
        indices.iter().map(|&i| self.residue(i)).collect()
    }

    /// Guess the alphabet of a raw residue string.
    ///
    /// Tried narrowest first, so `acgt` input is read as DNA rather than as
    /// a fragment of the amino alphabet.
    pub fn guess(residues: &str) -> Option<Self> {
        for alphabet in [Self::dna(), Self::dna_with_n(), Self::rna(), Self::amino()] {
            if alphabet.valid_residues(residues) {
                return Some(alphabet);
            }
        }
        None
    }
}
