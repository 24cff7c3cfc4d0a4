//! Pairwise alignment: the affine-gap DP engine, the alignment
//! representation, and the Hamming-distance fast path.

pub mod aligner;
pub mod alignment;
pub mod hamming;

pub use aligner::{BoundedScore, GlobalAffineAligner};
pub use alignment::{Alignment, GAP, INDEL_CHAR};
