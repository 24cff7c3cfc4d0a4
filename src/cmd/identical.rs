//! List database sequences identical to each query.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::alphabet_from_seq_type;
use crate::common::output_writer;
use crate::io::read_fasta;
use crate::scoring::IdentityScoring;
use crate::search::SimilaritySearch;

#[derive(Args, Debug)]
pub struct IdenticalArgs {
    /// Query sequences (FASTA)
    #[arg(short, long)]
    pub query: PathBuf,
    /// Database sequences (FASTA)
    #[arg(short, long)]
    pub database: PathBuf,
    /// Sequence alphabet: auto, dna, dna-n, rna or amino
    #[arg(long, default_value = "auto")]
    pub seq_type: String,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: IdenticalArgs) -> Result<()> {
    let alphabet = alphabet_from_seq_type(&args.seq_type)?;
    let (db, alphabet) = read_fasta(&args.database, alphabet.as_ref())?;
    let (queries, _) = read_fasta(&args.query, Some(&alphabet))?;

    let scoring = IdentityScoring::with_defaults(alphabet);
    let search = SimilaritySearch::new(&scoring, &db);

    let mut writer = output_writer(args.out.as_ref())?;
    for query in &queries {
        for idx in search.identical_matches(query) {
            writeln!(writer, "{}\t{}\t{}", query.name(), db[idx].name(), idx)?;
        }
    }
    writer.flush()?;
    Ok(())
}
