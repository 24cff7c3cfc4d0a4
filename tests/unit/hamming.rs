//! Bounded Hamming distance checked against naive counting.

use simsearch::align::hamming::{bounded_distance, bounded_distance_gap_at_start};

use super::helpers::Lcg;

fn naive_distance(s0: &[u8], s1: &[u8]) -> usize {
    let shorter = s0.len().min(s1.len());
    s0.len().max(s1.len()) - shorter + (0..shorter).filter(|&i| s0[i] != s1[i]).count()
}

fn naive_distance_right_justified(s0: &[u8], s1: &[u8]) -> usize {
    let (shorter, longer) = if s0.len() <= s1.len() { (s0, s1) } else { (s1, s0) };
    let diff = longer.len() - shorter.len();
    diff + (0..shorter.len())
        .filter(|&i| shorter[i] != longer[i + diff])
        .count()
}

#[test]
fn test_matches_naive_count_below_threshold() {
    let mut rng = Lcg::new(5);
    for _ in 0..80 {
        let len0 = (rng.next_u32() % 12) as usize;
        let s0 = rng.sequence(len0, 4);
        let len1 = (rng.next_u32() % 12) as usize;
        let s1 = rng.sequence(len1, 4);
        // threshold above any possible distance: exact values
        let loose = s0.len() + s1.len() + 1;
        assert_eq!(bounded_distance(&s0, &s1, loose), naive_distance(&s0, &s1));
        assert_eq!(
            bounded_distance_gap_at_start(&s0, &s1, loose),
            naive_distance_right_justified(&s0, &s1)
        );
    }
}

#[test]
fn test_early_exit_reports_reaching_the_threshold() {
    let mut rng = Lcg::new(29);
    for _ in 0..40 {
        let s0 = rng.sequence(10, 4);
        let s1 = rng.sequence(10, 4);
        let exact = naive_distance(&s0, &s1);
        for threshold in 1..=exact + 2 {
            let d = bounded_distance(&s0, &s1, threshold);
            if exact < threshold {
                assert_eq!(d, exact);
            } else {
                // gave up early, at the threshold
                assert_eq!(d, threshold);
            }
        }
    }
}

#[test]
fn test_symmetry() {
    let mut rng = Lcg::new(53);
    for _ in 0..40 {
        let len0 = (rng.next_u32() % 10) as usize;
        let s0 = rng.sequence(len0, 4);
        let len1 = (rng.next_u32() % 10) as usize;
        let s1 = rng.sequence(len1, 4);
        let loose = s0.len() + s1.len() + 1;
        assert_eq!(
            bounded_distance(&s0, &s1, loose),
            bounded_distance(&s1, &s0, loose)
        );
        assert_eq!(
            bounded_distance_gap_at_start(&s0, &s1, loose),
            bounded_distance_gap_at_start(&s1, &s0, loose)
        );
    }
}
