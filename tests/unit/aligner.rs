//! DP engine checked against a brute-force reference aligner.

use simsearch::align::{BoundedScore, GlobalAffineAligner};
use simsearch::alphabet::Alphabet;
use simsearch::scoring::{IdentityScoring, Pam120, SubstitutionScore};

use super::helpers::{brute_force_score, dna_seq, enumerate_sequences, Lcg};

fn default_identity() -> IdentityScoring {
    IdentityScoring::with_defaults(Alphabet::dna())
}

fn strict_identity() -> IdentityScoring {
    IdentityScoring::new(Alphabet::dna(), 2, -1, -3, -1)
}

#[test]
fn test_score_matches_brute_force_exhaustively() {
    // every pair of sequences over two residues up to length 4
    let seqs = enumerate_sequences(2, 4);
    for scoring in [default_identity(), strict_identity()] {
        for s0 in &seqs {
            let aligner = GlobalAffineAligner::new(&scoring, s0);
            for s1 in &seqs {
                assert_eq!(
                    aligner.score(s1),
                    brute_force_score(&scoring, s0, s1),
                    "s0={:?} s1={:?}",
                    s0,
                    s1
                );
            }
        }
    }
}

#[test]
fn test_concrete_scenario_from_four_letter_alphabet() {
    let scoring = default_identity();
    let s0 = dna_seq("acgt");
    let aligner = GlobalAffineAligner::new(&scoring, &s0);
    assert_eq!(aligner.score(&dna_seq("acgt")), 4);
    // one deletion: 3 + gap initiation + gap extension
    assert_eq!(aligner.score(&dna_seq("agt")), 0);
}

#[test]
fn test_self_score_is_sum_of_diagonal() {
    let pam = Pam120::new();
    let amino = Alphabet::amino();
    let residues = amino.encode("MKWVTFISLLFLFSSAYS").unwrap();
    let aligner = GlobalAffineAligner::new(&pam, &residues);
    let diagonal: i32 = residues.iter().map(|&r| pam.score(r, r)).sum();
    assert_eq!(aligner.score(&residues), diagonal);
}

#[test]
fn test_alignment_round_trip_pam120() {
    let pam = Pam120::new();
    let amino = Alphabet::amino();
    let pairs = [
        ("MKWVTFISLL", "MKWVTFISLL"),
        ("MKWVTFISLL", "MKWTFISL"),
        ("HEAGAWGHEE", "PAWHEAE"),
        ("W", "MKWVT"),
    ];
    for (a, b) in pairs {
        let s0 = amino.encode(a).unwrap();
        let s1 = amino.encode(b).unwrap();
        let aligner = GlobalAffineAligner::new(&pam, &s0);
        let alignment = aligner.alignment(&s1);
        assert_eq!(alignment.score(&pam), aligner.score(&s1), "{} vs {}", a, b);
        assert!(alignment.is_valid(&amino));
    }
}

#[test]
fn test_alignment_round_trip_random_dna() {
    let scoring = strict_identity();
    let mut rng = Lcg::new(7);
    for _ in 0..40 {
        let len0 = 3 + (rng.next_u32() % 12) as usize;
        let s0 = rng.sequence(len0, 4);
        let len1 = 3 + (rng.next_u32() % 12) as usize;
        let s1 = rng.sequence(len1, 4);
        let aligner = GlobalAffineAligner::new(&scoring, &s0);
        let alignment = aligner.alignment(&s1);
        assert_eq!(alignment.score(&scoring), aligner.score(&s1));
    }
}

#[test]
fn test_bounds_bracket_the_exact_score() {
    let scoring = default_identity();
    let mut rng = Lcg::new(11);
    for _ in 0..60 {
        let len0 = 1 + (rng.next_u32() % 15) as usize;
        let s0 = rng.sequence(len0, 4);
        let len1 = 1 + (rng.next_u32() % 15) as usize;
        let s1 = rng.sequence(len1, 4);
        let aligner = GlobalAffineAligner::new(&scoring, &s0);
        let score = aligner.score(&s1);
        assert!(aligner.feasible_bound(&s1) <= score);
        assert!(score <= aligner.length_difference_based_score_upper_bound(&s1));
        assert!(
            aligner.length_difference_based_score_upper_bound(&s1)
                <= aligner.best_possible_score()
        );
        assert!(score <= aligner.purely_length_difference_based_score_upper_bound(s1.len()));
    }
}

#[test]
fn test_bounded_score_agrees_with_exact_when_not_pruned() {
    let scoring = default_identity();
    let mut rng = Lcg::new(23);
    for _ in 0..60 {
        let len0 = 1 + (rng.next_u32() % 12) as usize;
        let s0 = rng.sequence(len0, 4);
        let len1 = 1 + (rng.next_u32() % 12) as usize;
        let s1 = rng.sequence(len1, 4);
        let aligner = GlobalAffineAligner::new(&scoring, &s0);
        let exact = aligner.score(&s1);

        // below the true score: must return it exactly
        assert_eq!(
            aligner.score_suffix_bounded(&s1, exact - 1),
            BoundedScore::Exact(exact)
        );
        // at or above the true score: must prune
        assert_eq!(aligner.score_suffix_bounded(&s1, exact), BoundedScore::BelowBound);
        assert_eq!(
            aligner.score_suffix_bounded(&s1, exact + 3),
            BoundedScore::BelowBound
        );
        // a hopeless bound never prunes
        assert_eq!(
            aligner.score_suffix_bounded(&s1, -10_000),
            BoundedScore::Exact(exact)
        );
    }
}

#[test]
fn test_free_start_gap_never_below_global_score() {
    let scoring = default_identity();
    let seqs = enumerate_sequences(2, 4);
    for s0 in &seqs {
        let aligner = GlobalAffineAligner::new(&scoring, s0);
        for s1 in &seqs {
            assert!(
                aligner.score_free_start_gap(s1) >= aligner.score(s1),
                "s0={:?} s1={:?}",
                s0,
                s1
            );
        }
    }
}

#[test]
fn test_free_start_gap_skips_either_prefix() {
    let scoring = default_identity();
    let s0 = dna_seq("acgt");
    let aligner = GlobalAffineAligner::new(&scoring, &s0);
    assert_eq!(aligner.score_free_start_gap(&dna_seq("ttttacgt")), 4);

    let s0_long = dna_seq("ttttacgt");
    let aligner_long = GlobalAffineAligner::new(&scoring, &s0_long);
    assert_eq!(aligner_long.score_free_start_gap(&dna_seq("acgt")), 4);
}

#[test]
fn test_prefix_score_bounded_matches_score_when_alive() {
    let scoring = default_identity();
    let mut rng = Lcg::new(41);
    for _ in 0..30 {
        let len0 = 2 + (rng.next_u32() % 10) as usize;
        let s0 = rng.sequence(len0, 4);
        let len1 = 2 + (rng.next_u32() % 10) as usize;
        let s1 = rng.sequence(len1, 4);
        let aligner = GlobalAffineAligner::new(&scoring, &s0);
        assert_eq!(
            aligner.prefix_score_bounded(&s1, -10_000),
            BoundedScore::Exact(aligner.score(&s1))
        );
    }
}
