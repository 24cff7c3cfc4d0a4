//! Representation of one pair-wise alignment.

use crate::alphabet::Alphabet;
use crate::scoring::{Score, SubstitutionScore};

/// Reserved slot marking an indel column in an alignment row.
///
/// Never a valid residue index: alphabets are capped well below this.
pub const GAP: u8 = u8::MAX;

/// Character used for indel columns when rendering.
pub const INDEL_CHAR: char = '-';

/// A pair-wise alignment: two equal-length rows of residue indices with
/// [`GAP`] marking indel columns. Produced by the full-table traceback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    row0: Vec<u8>,
    row1: Vec<u8>,
}

impl Alignment {
    pub fn new(row0: Vec<u8>, row1: Vec<u8>) -> Self {
        assert_eq!(
            row0.len(),
            row1.len(),
            "alignment rows differ in length: {} vs {}",
            row0.len(),
            row1.len()
        );
        Self { row0, row1 }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.row0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row0.is_empty()
    }

    pub fn row0(&self) -> &[u8] {
        &self.row0
    }

    pub fn row1(&self) -> &[u8] {
        &self.row1
    }

    /// Re-score the alignment under `scoring`.
    ///
    /// A maximal run of gap columns is charged one gap initiation plus one
    /// gap extension per column, no matter which row the gaps sit in. This
    /// matches how the aligner's collapsed gap state prices gaps, so the
    /// result reproduces the DP score of the sequences the alignment came
    /// from.
    pub fn score<S: SubstitutionScore>(&self, scoring: &S) -> Score {
        let mut total = 0;
        let mut in_gap = false;
        for (&a, &b) in self.row0.iter().zip(&self.row1) {
            if a == GAP || b == GAP {
                if !in_gap {
                    in_gap = true;
                    total += scoring.gap_initiation();
                }
                total += scoring.gap_extension();
                continue;
            }
            in_gap = false;
            total += scoring.score(a, b);
        }
        total
    }

    /// Percent identity over alignment columns.
    pub fn percent_identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let matches = self
            .row0
            .iter()
            .zip(&self.row1)
            .filter(|(&a, &b)| a != GAP && a == b)
            .count();
        200.0 * matches as f64 / (self.row0.len() + self.row1.len()) as f64
    }

    /// Valid iff every slot is either [`GAP`] or an index of `alphabet`,
    /// and no column is gap-against-gap.
    pub fn is_valid(&self, alphabet: &Alphabet) -> bool {
        self.row0.iter().zip(&self.row1).all(|(&a, &b)| {
            (a == GAP || alphabet.valid_index(a))
                && (b == GAP || alphabet.valid_index(b))
                && !(a == GAP && b == GAP)
        })
    }

    fn render_row(row: &[u8], alphabet: &Alphabet) -> String {
        row.iter()
            .map(|&r| if r == GAP { INDEL_CHAR } else { alphabet.residue(r) })
            .collect()
    }

    /// Both rows as displayable strings.
    pub fn to_strings(&self, alphabet: &Alphabet) -> (String, String) {
        (
            Self::render_row(&self.row0, alphabet),
            Self::render_row(&self.row1, alphabet),
        )
    }

    /// Text rendering, one line per row, with an optional third line marking
    /// matching columns with `*`.
    pub fn render_text(&self, alphabet: &Alphabet, mark_matches: bool) -> String {
        let (line0, line1) = self.to_strings(alphabet);
        let mut out = format!("{}\n{}\n", line0, line1);
        if mark_matches {
            let marks: String = self
                .row0
                .iter()
                .zip(&self.row1)
                .map(|(&a, &b)| if a != GAP && a == b { '*' } else { ' ' })
                .collect();
            out.push_str(marks.trim_end());
            out.push('\n');
        }
        out
    }
}
