//! PAM120 amino acid substitution matrix.
//!
//! Row/column order matches the amino alphabet:
//! `A R N D B C Q E Z G H I L K M F P S T W Y V U X`.
//! Entries for selenocysteine (U) and the ambiguity codes were filled in by
//! the matrix's original curator; X scores are uniformly hostile so unknown
//! residues never anchor an alignment.

use super::{Score, SubstitutionScore};
use crate::alphabet::Alphabet;

/// Number of residues the matrix covers.
pub const PAM120_SIGMA: usize = 24;

#[rustfmt::skip]
static PAM120: [[Score; PAM120_SIGMA]; PAM120_SIGMA] = [
    //        A   R   N   D   B   C   Q   E   Z   G   H   I   L   K   M   F   P   S   T   W   Y   V   U   X
    /* A */ [  3, -3, -1,  0,  0, -3, -1,  0,  0,  1, -3, -1, -3, -2, -2, -4,  1,  1,  1, -7, -4,  0,  1, -7],
    /* R */ [ -3,  6, -1, -3, -3, -4,  1, -3, -3, -4,  1, -2, -4,  2, -1, -5, -1, -1, -2,  1, -5, -3, -1, -5],
    /* N */ [ -1, -1,  4,  2,  2, -5,  0,  1,  0,  0,  2, -2, -4,  1, -3, -4, -2,  1,  0, -4, -2, -3,  1, -4],
    /* D */ [  0, -3,  2,  5,  2, -7,  1,  3,  1,  0,  0, -3, -5, -1, -4, -7, -3,  0, -1, -8, -5, -3,  0, -8],
    /* B */ [  0, -3,  2,  2,  2, -7,  0,  1,  0,  0,  0, -3, -5, -1, -4, -7, -3,  0, -1, -8, -5, -3,  0, -8],
    /* C */ [ -3, -4, -5, -7, -7,  9, -7, -7, -7, -4, -4, -3, -7, -7, -6, -6, -4,  0, -3, -8, -1, -3,  0, -8],
    /* Q */ [ -1,  1,  0,  1,  0, -7,  6,  2,  2, -3,  3, -3, -2,  0, -1, -6,  0, -2, -2, -6, -5, -3, -2, -7],
    /* E */ [  0, -3,  1,  3,  1, -7,  2,  5,  2, -1, -1, -3, -4, -1, -3, -7, -2, -1, -2, -8, -5, -3, -1, -8],
    /* Z */ [  0, -3,  0,  1,  0, -7,  2,  2,  2, -3, -1, -3, -4, -1, -3, -7, -2, -2, -2, -8, -5, -3, -2, -8],
    /* G */ [  1, -4,  0,  0,  0, -4, -3, -1, -3,  5, -4, -4, -5, -3, -4, -5, -2,  1, -1, -8, -6, -2,  1, -7],
    /* H */ [ -3,  1,  2,  0,  0, -4,  3, -1, -1, -4,  7, -4, -3, -2, -4, -3, -1, -2, -3, -3, -1, -3, -2, -4],
    /* I */ [ -1, -2, -2, -3, -3, -3, -3, -3, -3, -4, -4,  6,  1, -3,  1,  0, -3, -2,  0, -6, -2,  3, -2, -6],
    /* L */ [ -3, -4, -4, -5, -5, -7, -2, -4, -4, -5, -3,  1,  5, -4,  3,  0, -3, -4, -3, -3, -2,  1, -4, -7],
    /* K */ [ -2,  2,  1, -1, -1, -7,  0, -1, -1, -3, -2, -3, -4,  5,  0, -7, -2, -1, -1, -5, -5, -4, -1, -7],
    /* M */ [ -2, -1, -3, -4, -4, -6, -1, -3, -3, -4, -4,  1,  3,  0,  8, -1, -3, -2, -1, -6, -4,  1, -2, -6],
    /* F */ [ -4, -5, -4, -7, -7, -6, -6, -7, -7, -5, -3,  0,  0, -7, -1,  8, -5, -3, -4, -1,  4, -3, -3, -7],
    /* P */ [  1, -1, -2, -3, -3, -4,  0, -2, -2, -2, -1, -3, -3, -2, -3, -5,  6,  1, -1, -7, -6, -2,  1, -7],
    /* S */ [  1, -1,  1,  0,  0,  0, -2, -1, -2,  1, -2, -2, -4, -1, -2, -3,  1,  3,  2, -2, -3, -2,  2, -4],
    /* T */ [  1, -2,  0, -1, -1, -3, -2, -2, -2, -1, -3,  0, -3, -1, -1, -4, -1,  2,  4, -6, -3,  0,  2, -6],
    /* W */ [ -7,  1, -4, -8, -8, -8, -6, -8, -8, -8, -3, -6, -3, -5, -6, -1, -7, -2, -6, 12,  2, -8, -2, -8],
    /* Y */ [ -4, -5, -2, -5, -5, -1, -5, -5, -5, -6, -1, -2, -2, -5, -4,  4, -6, -3, -3, -2,  8, -3, -3, -6],
    /* V */ [  0, -3, -3, -3, -3, -3, -3, -3, -3, -2, -3,  3,  1, -4,  1, -3, -2, -2,  0, -8, -3,  5, -2, -8],
    /* U */ [  1, -1,  1,  0,  0,  0, -2, -1, -2,  1, -2, -2, -4, -1, -2, -3,  1,  2,  2, -2, -3, -2, 12, -4],
    /* X */ [ -7, -5, -4, -8, -8, -8, -7, -8, -8, -7, -4, -6, -7, -7, -6, -7, -7, -4, -6, -8, -6, -8, -4, -8],
];

#[rustfmt::skip]
static PAM120_MAX_SCORE: [Score; PAM120_SIGMA] = [
    // A   R   N   D   B   C   Q   E   Z   G   H   I   L   K   M   F   P   S   T   W   Y   V   U   X
       3,  6,  4,  5,  2,  9,  6,  5,  2,  5,  7,  6,  5,  5,  8,  8,  6,  3,  4, 12,  8,  5, 12, -4,
];

/// PAM120 scoring over the amino alphabet with -10/-8 affine gap costs.
#[derive(Debug, Clone)]
pub struct Pam120 {
    alphabet: Alphabet,
}

impl Pam120 {
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::amino(),
        }
    }
}

impl Default for Pam120 {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstitutionScore for Pam120 {
    #[inline]
    fn score(&self, r1: u8, r2: u8) -> Score {
        PAM120[r1 as usize][r2 as usize]
    }

    fn gap_initiation(&self) -> Score {
        -10
    }

    fn gap_extension(&self) -> Score {
        -8
    }

    fn max_score(&self) -> Score {
        12
    }

    #[inline]
    fn max_score_for(&self, r: u8) -> Score {
        PAM120_MAX_SCORE[r as usize]
    }

    fn min_score(&self) -> Score {
        -10
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
