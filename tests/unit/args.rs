//! CLI argument parsing tests.

use clap::{Args, Command, FromArgMatches};
use simsearch::cmd::hamming::HammingArgs;
use simsearch::cmd::search::SearchArgs;
use std::path::PathBuf;

fn parse_search(args: &[&str]) -> SearchArgs {
    let mut all_args = vec!["simsearch".to_string(), "search".to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd = Command::new("simsearch")
        .subcommand(SearchArgs::augment_args(Command::new("search")));
    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches("search").unwrap();
    SearchArgs::from_arg_matches(sub_matches).unwrap()
}

#[test]
fn test_search_default_values() {
    let args = parse_search(&["-q", "query.fasta", "-d", "db.fasta"]);

    assert_eq!(args.query, PathBuf::from("query.fasta"));
    assert_eq!(args.database, PathBuf::from("db.fasta"));
    assert_eq!(args.scoring.scoring, "identity");
    assert_eq!(args.scoring.match_score, 1);
    assert_eq!(args.scoring.mismatch_score, 0);
    assert_eq!(args.scoring.gap_open, -2);
    assert_eq!(args.scoring.gap_extend, -1);
    assert_eq!(args.scoring.seq_type, "auto");
    assert_eq!(args.looseness, 0);
    assert!(!args.skip_same_name);
    assert_eq!(args.skip_class, None);
    assert_eq!(args.num_threads, 0);
    assert_eq!(args.out, None);
    assert!(!args.verbose);
}

#[test]
fn test_search_custom_scoring() {
    let args = parse_search(&[
        "-q",
        "q.fasta",
        "-d",
        "d.fasta",
        "--scoring",
        "pam120",
        "--looseness",
        "3",
        "--skip-same-name",
    ]);
    assert_eq!(args.scoring.scoring, "pam120");
    assert_eq!(args.looseness, 3);
    assert!(args.skip_same_name);
}

#[test]
fn test_hamming_args() {
    let mut all_args = vec!["simsearch".to_string(), "hamming".to_string()];
    all_args.extend(
        ["-q", "q.fasta", "-d", "d.fasta", "--threshold", "4"]
            .iter()
            .map(|s| s.to_string()),
    );
    let cmd = Command::new("simsearch")
        .subcommand(HammingArgs::augment_args(Command::new("hamming")));
    let matches = cmd.get_matches_from(all_args);
    let args = HammingArgs::from_arg_matches(matches.subcommand_matches("hamming").unwrap()).unwrap();

    assert_eq!(args.threshold, 4);
    assert_eq!(args.anchor, "start");
    assert_eq!(args.seq_type, "auto");
}
