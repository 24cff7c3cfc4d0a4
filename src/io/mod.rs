//! FASTA ingestion producing validated, labeled sequences.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use bio::io::fasta;
use rustc_hash::FxHashMap;

use crate::alphabet::Alphabet;
use crate::sequence::Sequence;

/// Read a FASTA file into labeled sequences.
///
/// The first whitespace token of each header is the sequence name, the
/// remaining tokens become additional labels (so the second token acts as
/// the sequence class). Residues are validated through `alphabet`; when none
/// is given the alphabet is guessed from the first record and applied to the
/// whole file. Returns the sequences together with the alphabet actually
/// used, so a second file can be read under the same mapping. Duplicate
/// names are rejected.
pub fn read_fasta(
    path: &Path,
    alphabet: Option<&Alphabet>,
) -> Result<(Vec<Sequence>, Alphabet)> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("failed to open FASTA file {}", path.display()))?;

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(
            record.with_context(|| format!("failed to parse record in {}", path.display()))?,
        );
    }

    let alphabet = match alphabet {
        Some(a) => a.clone(),
        None => {
            let first = records
                .first()
                .ok_or_else(|| anyhow!("cannot guess an alphabet from empty {}", path.display()))?;
            let residues = std::str::from_utf8(first.seq())
                .with_context(|| format!("non-UTF8 residues in record {}", first.id()))?;
            Alphabet::guess(residues).ok_or_else(|| {
                anyhow!(
                    "could not determine the alphabet of record {} in {}",
                    first.id(),
                    path.display()
                )
            })?
        }
    };

    let mut seqs = Vec::with_capacity(records.len());
    let mut seen_names: FxHashMap<String, usize> = FxHashMap::default();

    for (rec_idx, record) in records.iter().enumerate() {
        let mut labels: Vec<String> = vec![record.id().to_string()];
        if let Some(desc) = record.desc() {
            labels.extend(desc.split_whitespace().map(str::to_string));
        }

        let residues = std::str::from_utf8(record.seq())
            .with_context(|| format!("non-UTF8 residues in record {}", record.id()))?;

        let seq = Sequence::from_residues(residues, labels, &alphabet)
            .with_context(|| format!("record {} in {}", record.id(), path.display()))?;

        if let Some(prev) = seen_names.insert(seq.name().to_string(), rec_idx) {
            bail!(
                "duplicate sequence name {} in {} (records {} and {})",
                seq.name(),
                path.display(),
                prev,
                rec_idx
            );
        }
        seqs.push(seq);
    }

    Ok((seqs, alphabet))
}
