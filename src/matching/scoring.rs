use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::types::{DnaMatch, GenomeMatch};

/// Convert a count to f64 for percentage calculations.
///
/// Chunk and hit counts stay far below the f64 mantissa limit in practice.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Percentage of `chunk_count` represented by `hits`.
///
/// Hits are raw match records, so the result can exceed 100 when one chunk
/// matches a genome in several places. Zero chunks give 0.
#[must_use]
pub fn percent_match(hits: usize, chunk_count: usize) -> f64 {
    if chunk_count == 0 {
        0.0
    } else {
        100.0 * count_to_f64(hits) / count_to_f64(chunk_count)
    }
}

/// Per-genome count of match records gathered over the chunks of one query
#[derive(Debug, Default)]
pub struct HitTally {
    excluded: String,
    hits: HashMap<String, usize>,
}

impl HitTally {
    /// Start a tally that ignores matches in the genome named `excluded`
    pub fn excluding(excluded: impl Into<String>) -> Self {
        Self {
            excluded: excluded.into(),
            hits: HashMap::new(),
        }
    }

    /// Count every record, one hit each
    pub fn record(&mut self, matches: &[DnaMatch]) {
        for m in matches {
            if m.genome_name != self.excluded {
                *self.hits.entry(m.genome_name.clone()).or_default() += 1;
            }
        }
    }

    #[cfg(test)]
    fn hits(&self, genome_name: &str) -> usize {
        self.hits.get(genome_name).copied().unwrap_or(0)
    }

    /// Turn the tally into ranked matches meeting `threshold` percent
    #[must_use]
    pub fn into_genome_matches(self, chunk_count: usize, threshold: f64) -> Vec<GenomeMatch> {
        let mut results: Vec<GenomeMatch> = self
            .hits
            .into_iter()
            .map(|(genome_name, hits)| GenomeMatch {
                genome_name,
                percent_match: percent_match(hits, chunk_count),
            })
            .filter(|m| m.percent_match >= threshold)
            .collect();

        rank_genome_matches(&mut results);
        results
    }
}

/// Sort by percentage descending, then by genome name ascending
pub fn rank_genome_matches(matches: &mut [GenomeMatch]) {
    matches.sort_by(|a, b| {
        b.percent_match
            .partial_cmp(&a.percent_match)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.genome_name.cmp(&b.genome_name))
    });
}
