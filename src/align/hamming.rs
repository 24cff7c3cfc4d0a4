//! Bounded Hamming distance between residue-index sequences.
//!
//! A cheap pre-filter for the similarity search: counts positional
//! mismatches but gives up as soon as the running count reaches the caller's
//! threshold, so hopeless comparisons cost O(threshold) instead of O(n).
//! Sequences of unequal length are allowed; the `|len0 - len1|` excess
//! characters count as mismatches.

/// Bounded Hamming distance with both sequences anchored at their start:
/// length excess is treated as a trailing gap.
///
/// Returns the exact distance if it is below `threshold`, otherwise the
/// running count at the moment it reached `threshold`.
pub fn bounded_distance(s0: &[u8], s1: &[u8], threshold: usize) -> usize {
    let shorter_len = s0.len().min(s1.len());
    let mut mismatches = s0.len().max(s1.len()) - shorter_len;

    // lengths alone may already settle it
    if mismatches >= threshold {
        return mismatches;
    }

    for i in 0..shorter_len {
        if s0[i] != s1[i] {
            mismatches += 1;
            if mismatches >= threshold {
                return mismatches;
            }
        }
    }
    mismatches
}

/// Bounded Hamming distance with both sequences anchored at their end:
/// length excess is treated as a gap at the beginning.
///
/// Used for sequences expected to share a suffix, e.g. reads carrying a
/// trailing barcode.
pub fn bounded_distance_gap_at_start(s0: &[u8], s1: &[u8], threshold: usize) -> usize {
    let shorter_len = s0.len().min(s1.len());
    let len_diff = s0.len().max(s1.len()) - shorter_len;
    let mut mismatches = len_diff;

    if mismatches >= threshold {
        return mismatches;
    }

    let (shorter, longer) = if s0.len() <= s1.len() { (s0, s1) } else { (s1, s0) };

    for i in 0..shorter_len {
        if shorter[i] != longer[i + len_diff] {
            mismatches += 1;
            if mismatches >= threshold {
                return mismatches;
            }
        }
    }
    mismatches
}
