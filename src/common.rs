use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::scoring::Score;

/// One best-match search result row.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub query_id: String,
    /// Name of the best match, or "-" when nothing reached the floor.
    pub subject_id: String,
    /// Index of the best match in the database, if any.
    pub subject_idx: Option<usize>,
    /// Exact alignment score of the reported match.
    pub score: Option<Score>,
    /// Upper bound on any score the query could reach.
    pub best_possible_score: Score,
    /// Query index in input order, used to keep output order stable under
    /// parallel search.
    pub q_idx: usize,
}

/// Writer to `out_path`, or stdout when no path is given.
pub fn output_writer(out_path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if let Some(path) = out_path {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(io::stdout().lock()))
    };
    Ok(writer)
}

/// Write hits as tab-separated rows in query input order:
/// query, subject, subject index, score, query best-possible score.
pub fn write_search_hits(mut hits: Vec<SearchHit>, out_path: Option<&PathBuf>) -> Result<()> {
    let mut writer = output_writer(out_path)?;

    hits.sort_by_key(|h| h.q_idx);
    for hit in &hits {
        let idx = hit
            .subject_idx
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string());
        let score = hit
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            hit.query_id, hit.subject_id, idx, score, hit.best_possible_score
        )?;
    }
    writer.flush()?;
    Ok(())
}
