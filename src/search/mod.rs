//! Similarity search over a sequence collection.
//!
//! Wraps a scoring model around a borrowed database of sequences and
//! answers exact-match, within-Hamming-distance and best-match queries.
//! `best_match` is the interesting one: it combines cheap per-candidate
//! lower bounds, a pruning-friendly visit order and the banded bounded
//! aligner so that most candidates are dismissed long before a full O(n·m)
//! comparison.

pub mod predicate;

pub use predicate::{AnyOf, ClassFilter, NamesEqual, NeverSkip, PairPredicate};

use crate::align::hamming;
use crate::align::{BoundedScore, GlobalAffineAligner};
use crate::scoring::{Score, SubstitutionScore};
use crate::sequence::Sequence;

/// A searchable view over a sequence collection.
///
/// Borrows both the scoring model and the sequences; all query methods are
/// `&self` and keep their scratch local, so one index can serve concurrent
/// callers.
pub struct SimilaritySearch<'a, S: SubstitutionScore> {
    scoring: &'a S,
    seqs: &'a [Sequence],
}

impl<'a, S: SubstitutionScore> SimilaritySearch<'a, S> {
    pub fn new(scoring: &'a S, seqs: &'a [Sequence]) -> Self {
        Self { scoring, seqs }
    }

    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    pub fn sequence(&self, index: usize) -> &Sequence {
        &self.seqs[index]
    }

    pub fn scoring(&self) -> &S {
        self.scoring
    }

    /// Indices of all sequences whose residue-index array equals the
    /// query's exactly. Linear scan.
    pub fn identical_matches(&self, query: &Sequence) -> Vec<usize> {
        self.seqs
            .iter()
            .enumerate()
            .filter(|(_, seq)| seq.residue_indices() == query.residue_indices())
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of all sequences with Hamming distance `< threshold` from
    /// the query (start-anchored, length excess counted as mismatches).
    pub fn within_hamming_distance(&self, query: &Sequence, threshold: usize) -> Vec<usize> {
        self.seqs
            .iter()
            .enumerate()
            .filter(|(_, seq)| {
                hamming::bounded_distance(
                    seq.residue_indices(),
                    query.residue_indices(),
                    threshold,
                ) < threshold
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// True iff `skip` would reject every pairing of the query with the
    /// collection.
    pub fn would_skip_all(&self, query: &Sequence, skip: &dyn PairPredicate) -> bool {
        self.seqs.iter().all(|seq| skip.skip(seq, query))
    }

    /// Best-scoring database sequence for `query` under global affine-gap
    /// alignment, or `None` if nothing reaches the acceptance floor.
    ///
    /// `looseness_factor` sets that floor: nonzero means only scores within
    /// `looseness_factor · √|query|` of the query's best possible score are
    /// acceptable; zero means any score wins.
    ///
    /// The search visits candidates in descending order of their O(n)
    /// feasible bounds (ties keep collection order, so results are
    /// deterministic) and compares each with the suffix-bounded aligner
    /// against the best score seen so far, so most candidates die in the
    /// bounded pass without a full table.
    ///
    /// Panics if the collection is empty or `skip` would reject every
    /// candidate; both indicate integration bugs, not data conditions.
    pub fn best_match(
        &self,
        query: &Sequence,
        looseness_factor: Score,
        skip: &dyn PairPredicate,
    ) -> Option<(usize, Score)> {
        assert!(
            !self.seqs.is_empty(),
            "attempted to search an empty sequence collection"
        );
        assert!(
            !self.would_skip_all(query, skip),
            "for query {}, predicate \"{}\" would skip every sequence pair",
            query.name(),
            skip.describe()
        );

        let aligner = GlobalAffineAligner::new(self.scoring, query.residue_indices());

        let lowest_acceptable_score = if looseness_factor != 0 {
            aligner.best_possible_score()
                - looseness_factor * (query.len() as f64).sqrt() as Score
        } else {
            Score::MIN
        };

        // Cheap achievable lower bound per candidate; skipped pairs are left
        // out so they can neither seed the champion nor raise the floor.
        let mut seq_bounds = vec![Score::MIN; self.seqs.len()];
        let mut best_match_idx = None;
        let mut best_lower_bound = Score::MIN;
        for (i, seq) in self.seqs.iter().enumerate() {
            if skip.skip(seq, query) {
                continue;
            }
            seq_bounds[i] = aligner.feasible_bound(seq.residue_indices());
            if best_match_idx.is_none() || seq_bounds[i] > best_lower_bound {
                best_lower_bound = seq_bounds[i];
                best_match_idx = Some(i);
            }
        }
        // the feasible bound is the score of a concrete alignment, so the
        // best-bounded candidate is already a valid provisional answer
        let mut best_match_idx = best_match_idx.expect("predicate pre-check guarantees a candidate");

        // visit likely-good candidates first; stable sort keeps collection
        // order on ties, which keeps results reproducible
        let mut seqs_by_bound: Vec<usize> = (0..self.seqs.len()).collect();
        seqs_by_bound.sort_by(|&a, &b| seq_bounds[b].cmp(&seq_bounds[a]));

        for &seq_idx in &seqs_by_bound {
            let seq = &self.seqs[seq_idx];
            if skip.skip(seq, query) {
                continue;
            }
            if let BoundedScore::Exact(score) =
                aligner.score_suffix_bounded(seq.residue_indices(), best_lower_bound)
            {
                // exact, and above every score seen so far
                best_lower_bound = score;
                best_match_idx = seq_idx;
            }
        }

        if best_lower_bound >= lowest_acceptable_score {
            Some((best_match_idx, best_lower_bound))
        } else {
            None
        }
    }
}
