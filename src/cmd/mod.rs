//! CLI subcommands.

pub mod align;
pub mod hamming;
pub mod identical;
pub mod search;

use anyhow::{bail, Result};
use clap::Args;

use crate::alphabet::Alphabet;
use crate::scoring::{IdentityScoring, Pam120, Score, ScoringModel};
use crate::search::{AnyOf, ClassFilter, NamesEqual, NeverSkip, PairPredicate};

/// Scoring and alphabet selection shared by the alignment-based subcommands.
#[derive(Args, Debug)]
pub struct ScoringArgs {
    /// Scoring model: identity or pam120
    #[arg(long, default_value = "identity")]
    pub scoring: String,
    /// Match score (identity scoring)
    #[arg(long, default_value_t = 1)]
    pub match_score: Score,
    /// Mismatch score (identity scoring)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub mismatch_score: Score,
    /// Gap initiation cost, must be <= 0 (identity scoring)
    #[arg(long, default_value_t = -2, allow_hyphen_values = true)]
    pub gap_open: Score,
    /// Gap extension cost, must be <= 0 (identity scoring)
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub gap_extend: Score,
    /// Sequence alphabet: auto, dna, dna-n, rna or amino
    #[arg(long, default_value = "auto")]
    pub seq_type: String,
}

/// Map a `--seq-type` value to an alphabet; `auto` means guess per file.
pub fn alphabet_from_seq_type(seq_type: &str) -> Result<Option<Alphabet>> {
    match seq_type {
        "auto" => Ok(None),
        "dna" => Ok(Some(Alphabet::dna())),
        "dna-n" => Ok(Some(Alphabet::dna_with_n())),
        "rna" => Ok(Some(Alphabet::rna())),
        "amino" => Ok(Some(Alphabet::amino())),
        other => bail!("unknown sequence type: {}", other),
    }
}

/// Resolve the alphabet implied by the scoring selection. PAM120 is defined
/// over the amino alphabet only.
pub fn resolve_alphabet(args: &ScoringArgs) -> Result<Option<Alphabet>> {
    if args.scoring == "pam120" {
        if args.seq_type != "auto" && args.seq_type != "amino" {
            bail!("pam120 scoring requires the amino alphabet, not {}", args.seq_type);
        }
        return Ok(Some(Alphabet::amino()));
    }
    alphabet_from_seq_type(&args.seq_type)
}

/// Build the scoring model the arguments describe, over `alphabet`.
pub fn build_scoring(args: &ScoringArgs, alphabet: Alphabet) -> Result<ScoringModel> {
    match args.scoring.as_str() {
        "identity" => Ok(ScoringModel::Identity(IdentityScoring::new(
            alphabet,
            args.match_score,
            args.mismatch_score,
            args.gap_open,
            args.gap_extend,
        ))),
        "pam120" => Ok(ScoringModel::Pam120(Pam120::new())),
        other => bail!("unknown scoring model: {}", other),
    }
}

/// Compose the pair-skip predicate from the CLI flags.
pub fn build_skip_predicate(
    skip_same_name: bool,
    skip_class: Option<String>,
) -> Box<dyn PairPredicate + Send + Sync> {
    match (skip_same_name, skip_class) {
        (false, None) => Box::new(NeverSkip),
        (true, None) => Box::new(NamesEqual),
        (false, Some(class)) => Box::new(ClassFilter::new(class)),
        (true, Some(class)) => Box::new(AnyOf::new(vec![
            Box::new(NamesEqual),
            Box::new(ClassFilter::new(class)),
        ])),
    }
}
