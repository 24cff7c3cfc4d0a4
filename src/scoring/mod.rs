//! Residue substitution scoring models for alignment.
//!
//! A scoring model is a pure function table: similarity score for a pair of
//! residue indices plus affine gap costs, together with the derived bounds
//! (`max_score`, `min_score`) the pruning algorithms rely on.

pub mod pam120;

pub use pam120::Pam120;

use crate::alphabet::Alphabet;

/// Alignment score. Similarity, not distance: larger is better.
pub type Score = i32;

/// Substitution scoring contract shared by all alignment and search code.
///
/// The `min_score` invariant is load-bearing: every bounding algorithm is
/// correct only if `min_score()` is ≤ every pair score and both gap costs.
/// `GlobalAffineAligner::new` validates it once per engine.
pub trait SubstitutionScore {
    /// Similarity score of a residue-index pair.
    fn score(&self, r1: u8, r2: u8) -> Score;

    /// Cost charged once when a gap run is opened. ≤ 0.
    fn gap_initiation(&self) -> Score;

    /// Cost charged per gap column. ≤ 0.
    fn gap_extension(&self) -> Score;

    /// Best score achievable by any residue pair.
    fn max_score(&self) -> Score;

    /// Best score achievable by any pair with one side fixed to `r`.
    fn max_score_for(&self, r: u8) -> Score;

    /// Lower bound on every pair score, gap initiation and gap extension.
    fn min_score(&self) -> Score;

    /// The alphabet the residue indices are drawn from.
    fn alphabet(&self) -> &Alphabet;

    /// Check the `min_score` invariant over the whole score table.
    fn min_score_is_valid(&self) -> bool {
        let min = self.min_score();
        if min > self.gap_initiation() || min > self.gap_extension() {
            return false;
        }
        let sigma = self.alphabet().sigma() as u8;
        for r1 in 0..sigma {
            for r2 in 0..sigma {
                if min > self.score(r1, r2) {
                    return false;
                }
            }
        }
        true
    }
}

/// Identity scoring: fixed match/mismatch scores plus affine gap costs.
///
/// With the default 1/0 match/mismatch scores the alignment score is the
/// number of identical aligned columns, which makes percent identity a
/// direct by-product.
#[derive(Debug, Clone)]
pub struct IdentityScoring {
    alphabet: Alphabet,
    match_score: Score,
    mismatch_score: Score,
    gap_initiation: Score,
    gap_extension: Score,
    min_score: Score,
}

impl IdentityScoring {
    pub fn new(
        alphabet: Alphabet,
        match_score: Score,
        mismatch_score: Score,
        gap_initiation: Score,
        gap_extension: Score,
    ) -> Self {
        let min_score = match_score
            .min(mismatch_score)
            .min(gap_initiation)
            .min(gap_extension);
        Self {
            alphabet,
            match_score,
            mismatch_score,
            gap_initiation,
            gap_extension,
            min_score,
        }
    }

    /// Default parameters: match 1, mismatch 0, gap initiation -2, extension -1.
    pub fn with_defaults(alphabet: Alphabet) -> Self {
        Self::new(alphabet, 1, 0, -2, -1)
    }
}

impl SubstitutionScore for IdentityScoring {
    #[inline]
    fn score(&self, r1: u8, r2: u8) -> Score {
        if r1 == r2 {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn gap_initiation(&self) -> Score {
        self.gap_initiation
    }

    fn gap_extension(&self) -> Score {
        self.gap_extension
    }

    fn max_score(&self) -> Score {
        self.match_score
    }

    fn max_score_for(&self, _r: u8) -> Score {
        self.match_score
    }

    fn min_score(&self) -> Score {
        self.min_score
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Runtime-selectable scoring model, for callers (like the CLI) that pick
/// the model from configuration.
#[derive(Debug, Clone)]
pub enum ScoringModel {
    Identity(IdentityScoring),
    Pam120(Pam120),
}

impl SubstitutionScore for ScoringModel {
    #[inline]
    fn score(&self, r1: u8, r2: u8) -> Score {
        match self {
            ScoringModel::Identity(s) => s.score(r1, r2),
            ScoringModel::Pam120(s) => s.score(r1, r2),
        }
    }

    fn gap_initiation(&self) -> Score {
        match self {
            ScoringModel::Identity(s) => s.gap_initiation(),
            ScoringModel::Pam120(s) => s.gap_initiation(),
        }
    }

    fn gap_extension(&self) -> Score {
        match self {
            ScoringModel::Identity(s) => s.gap_extension(),
            ScoringModel::Pam120(s) => s.gap_extension(),
        }
    }

    fn max_score(&self) -> Score {
        match self {
            ScoringModel::Identity(s) => s.max_score(),
            ScoringModel::Pam120(s) => s.max_score(),
        }
    }

    #[inline]
    fn max_score_for(&self, r: u8) -> Score {
        match self {
            ScoringModel::Identity(s) => s.max_score_for(r),
            ScoringModel::Pam120(s) => s.max_score_for(r),
        }
    }

    fn min_score(&self) -> Score {
        match self {
            ScoringModel::Identity(s) => s.min_score(),
            ScoringModel::Pam120(s) => s.min_score(),
        }
    }

    fn alphabet(&self) -> &Alphabet {
        match self {
            ScoringModel::Identity(s) => s.alphabet(),
            ScoringModel::Pam120(s) => s.alphabet(),
        }
    }
}
