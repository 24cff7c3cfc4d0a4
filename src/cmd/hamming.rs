//! List database sequences within a Hamming distance of each query.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use super::alphabet_from_seq_type;
use crate::align::hamming::{bounded_distance, bounded_distance_gap_at_start};
use crate::common::output_writer;
use crate::io::read_fasta;

#[derive(Args, Debug)]
pub struct HammingArgs {
    /// Query sequences (FASTA)
    #[arg(short, long)]
    pub query: PathBuf,
    /// Database sequences (FASTA)
    #[arg(short, long)]
    pub database: PathBuf,
    /// Report sequences with distance strictly below this
    #[arg(short, long)]
    pub threshold: usize,
    /// Which end the sequences share: "start" pads length excess at the
    /// end, "end" right-justifies (for shared suffixes such as trailing
    /// barcodes)
    #[arg(long, default_value = "start")]
    pub anchor: String,
    /// Sequence alphabet: auto, dna, dna-n, rna or amino
    #[arg(long, default_value = "auto")]
    pub seq_type: String,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: HammingArgs) -> Result<()> {
    let distance: fn(&[u8], &[u8], usize) -> usize = match args.anchor.as_str() {
        "start" => bounded_distance,
        "end" => bounded_distance_gap_at_start,
        other => bail!("unknown anchor: {} (expected start or end)", other),
    };

    let alphabet = alphabet_from_seq_type(&args.seq_type)?;
    let (db, alphabet) = read_fasta(&args.database, alphabet.as_ref())?;
    let (queries, _) = read_fasta(&args.query, Some(&alphabet))?;

    let mut writer = output_writer(args.out.as_ref())?;
    for query in &queries {
        for (idx, seq) in db.iter().enumerate() {
            let d = distance(seq.residue_indices(), query.residue_indices(), args.threshold);
            if d < args.threshold {
                writeln!(writer, "{}\t{}\t{}\t{}", query.name(), seq.name(), idx, d)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
