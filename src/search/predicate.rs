//! Predicates deciding whether a database/query sequence pair should be
//! skipped during search.

use crate::sequence::Sequence;

/// Decide whether the comparison of a database sequence against a query
/// should be skipped.
pub trait PairPredicate {
    /// True iff the pair `(database_seq, query)` must not be compared.
    fn skip(&self, database_seq: &Sequence, query: &Sequence) -> bool;

    /// Short human-readable description, used in diagnostics.
    fn describe(&self) -> String;
}

/// Skips nothing; the default for [`best_match`](crate::search::SimilaritySearch::best_match).
pub struct NeverSkip;

impl PairPredicate for NeverSkip {
    fn skip(&self, _database_seq: &Sequence, _query: &Sequence) -> bool {
        false
    }

    fn describe(&self) -> String {
        "never".to_string()
    }
}

/// Skips pairs whose names are equal, the usual way to keep a query from
/// matching its own database entry.
pub struct NamesEqual;

impl PairPredicate for NamesEqual {
    fn skip(&self, database_seq: &Sequence, query: &Sequence) -> bool {
        database_seq.name() == query.name()
    }

    fn describe(&self) -> String {
        "names equal".to_string()
    }
}

/// Skips database sequences belonging to a given class, regardless of the
/// query.
pub struct ClassFilter {
    class_name: String,
}

impl ClassFilter {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl PairPredicate for ClassFilter {
    fn skip(&self, database_seq: &Sequence, _query: &Sequence) -> bool {
        database_seq.class_name() == self.class_name
    }

    fn describe(&self) -> String {
        format!("class == {}", self.class_name)
    }
}

/// Short-circuit logical OR over a list of predicates: skips a pair iff any
/// member does.
pub struct AnyOf {
    predicates: Vec<Box<dyn PairPredicate + Send + Sync>>,
}

impl AnyOf {
    pub fn new(predicates: Vec<Box<dyn PairPredicate + Send + Sync>>) -> Self {
        Self { predicates }
    }
}

impl PairPredicate for AnyOf {
    fn skip(&self, database_seq: &Sequence, query: &Sequence) -> bool {
        self.predicates.iter().any(|p| p.skip(database_seq, query))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.predicates.iter().map(|p| p.describe()).collect();
        format!("any of [{}]", parts.join(", "))
    }
}
