//! Full global alignment of each query against each subject.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::{build_scoring, resolve_alphabet, ScoringArgs};
use crate::align::GlobalAffineAligner;
use crate::common::output_writer;
use crate::io::read_fasta;

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Query sequences (FASTA)
    #[arg(short, long)]
    pub query: PathBuf,
    /// Subject sequences (FASTA)
    #[arg(short, long)]
    pub subject: PathBuf,
    #[command(flatten)]
    pub scoring: ScoringArgs,
    /// Also report the score with free initial gaps (either sequence's
    /// prefix skippable at no cost)
    #[arg(long, default_value_t = false)]
    pub free_start_gap: bool,
    /// Mark matching columns with '*' under each alignment block
    #[arg(long, default_value_t = false)]
    pub mark_matches: bool,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: AlignArgs) -> Result<()> {
    let alphabet = resolve_alphabet(&args.scoring)?;
    let (queries, alphabet) = read_fasta(&args.query, alphabet.as_ref())?;
    let (subjects, _) = read_fasta(&args.subject, Some(&alphabet))?;

    let scoring = build_scoring(&args.scoring, alphabet.clone())?;
    let mut writer = output_writer(args.out.as_ref())?;

    for query in &queries {
        let aligner = GlobalAffineAligner::new(&scoring, query.residue_indices());
        for subject in &subjects {
            let alignment = aligner.alignment(subject.residue_indices());
            writeln!(
                writer,
                ">{} vs {}\tscore={}\tidentity={:.1}%",
                query.name(),
                subject.name(),
                alignment.score(&scoring),
                alignment.percent_identity()
            )?;
            if args.free_start_gap {
                writeln!(
                    writer,
                    "free-start-gap score={}",
                    aligner.score_free_start_gap(subject.residue_indices())
                )?;
            }
            writer.write_all(alignment.render_text(&alphabet, args.mark_matches).as_bytes())?;
        }
    }
    writer.flush()?;
    Ok(())
}
