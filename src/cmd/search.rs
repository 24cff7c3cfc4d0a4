//! Best-match search of a query set against a sequence database.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::{build_scoring, build_skip_predicate, resolve_alphabet, ScoringArgs};
use crate::align::GlobalAffineAligner;
use crate::common::{write_search_hits, SearchHit};
use crate::io::read_fasta;
use crate::scoring::Score;
use crate::search::SimilaritySearch;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query sequences (FASTA)
    #[arg(short, long)]
    pub query: PathBuf,
    /// Database sequences (FASTA)
    #[arg(short, long)]
    pub database: PathBuf,
    #[command(flatten)]
    pub scoring: ScoringArgs,
    /// Acceptance looseness: only scores within looseness * sqrt(query length)
    /// of the query's best possible score are reported. 0 accepts any score.
    #[arg(long, default_value_t = 0)]
    pub looseness: Score,
    /// Skip database sequences with the same name as the query
    #[arg(long, default_value_t = false)]
    pub skip_same_name: bool,
    /// Skip database sequences of this class
    #[arg(long)]
    pub skip_class: Option<String>,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

pub fn run(args: SearchArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("Failed to build thread pool")?;

    let alphabet = resolve_alphabet(&args.scoring)?;
    let (db, alphabet) = read_fasta(&args.database, alphabet.as_ref())?;
    let (queries, _) = read_fasta(&args.query, Some(&alphabet))?;
    if queries.is_empty() || db.is_empty() {
        return Ok(());
    }
    let scoring = build_scoring(&args.scoring, alphabet)?;
    let skip = build_skip_predicate(args.skip_same_name, args.skip_class.clone());
    let search = SimilaritySearch::new(&scoring, &db);

    if args.verbose {
        eprintln!(
            "[INFO] searching {} queries against {} database sequences ({} threads)",
            queries.len(),
            db.len(),
            num_threads
        );
    }

    let bar = ProgressBar::new(queries.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );

    // one query per task; every task builds its own aligner inside
    // best_match, the shared index is read-only
    let hits: Vec<SearchHit> = queries
        .par_iter()
        .enumerate()
        .map(|(q_idx, query)| {
            let best_possible = GlobalAffineAligner::single_seq_based_score_upper_bound(
                &scoring,
                query.residue_indices(),
            );
            let hit = match search.best_match(query, args.looseness, skip.as_ref()) {
                Some((idx, score)) => SearchHit {
                    query_id: query.name().to_string(),
                    subject_id: db[idx].name().to_string(),
                    subject_idx: Some(idx),
                    score: Some(score),
                    best_possible_score: best_possible,
                    q_idx,
                },
                None => SearchHit {
                    query_id: query.name().to_string(),
                    subject_id: "-".to_string(),
                    subject_idx: None,
                    score: None,
                    best_possible_score: best_possible,
                    q_idx,
                },
            };
            bar.inc(1);
            hit
        })
        .collect();
    bar.finish_and_clear();

    write_search_hits(hits, args.out.as_ref())?;
    Ok(())
}
