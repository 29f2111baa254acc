use tracing::debug;

use crate::core::genome::Genome;
use crate::core::types::GenomeMatch;
use crate::index::SequenceIndex;
use crate::matching::scoring::HitTally;

/// Default chunk size used to cut a query genome into fragments
pub const DEFAULT_FRAGMENT_LENGTH: usize = 16;

/// Default minimum percentage for a genome to be reported as related
pub const DEFAULT_MATCH_PERCENT_THRESHOLD: f64 = 10.0;

/// Configuration for relatedness queries
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RelatednessConfig {
    /// Length of each query chunk; must be at least the index's minimum search length
    pub fragment_length: usize,
    /// Disallow the single substituted base when matching chunks
    pub exact_match_only: bool,
    /// Minimum percentage (0-100) of chunks that must match a genome
    pub match_percent_threshold: f64,
}

impl RelatednessConfig {
    /// Number of whole, non-overlapping chunks `query` is cut into; a shorter
    /// tail is ignored and a zero fragment length gives no chunks
    #[must_use]
    pub fn chunk_count(&self, query: &Genome) -> usize {
        query
            .length()
            .checked_div(self.fragment_length)
            .unwrap_or(0)
    }
}

impl Default for RelatednessConfig {
    fn default() -> Self {
        Self {
            fragment_length: DEFAULT_FRAGMENT_LENGTH,
            exact_match_only: false,
            match_percent_threshold: DEFAULT_MATCH_PERCENT_THRESHOLD,
        }
    }
}

/// Scores indexed genomes by how many chunks of a query genome they contain
pub struct RelatednessEngine<'a> {
    index: &'a SequenceIndex,
    config: RelatednessConfig,
}

impl<'a> RelatednessEngine<'a> {
    /// Create an engine with default configuration
    pub fn new(index: &'a SequenceIndex) -> Self {
        Self {
            index,
            config: RelatednessConfig::default(),
        }
    }

    pub fn with_config(index: &'a SequenceIndex, config: RelatednessConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub fn config(&self) -> &RelatednessConfig {
        &self.config
    }

    /// Find genomes related to `query`, best first.
    ///
    /// The query is cut into consecutive, non-overlapping chunks of `fragment_length`
    /// bases (a shorter tail is ignored). Each chunk is searched with a minimum
    /// length of the whole chunk, and every returned match record counts as one hit
    /// for its genome. The query's own name is never reported.
    pub fn find_related(&self, query: &Genome) -> Vec<GenomeMatch> {
        let RelatednessConfig {
            fragment_length,
            exact_match_only,
            match_percent_threshold,
        } = self.config;

        if fragment_length == 0 || fragment_length < self.index.minimum_search_length() {
            debug!(
                fragment_length,
                minimum_search_length = self.index.minimum_search_length(),
                "Fragment length below minimum search length, rejected"
            );
            return Vec::new();
        }

        let chunk_count = self.config.chunk_count(query);
        let mut tally = HitTally::excluding(query.name());

        for chunk in 0..chunk_count {
            let Ok(fragment) = query.extract(chunk * fragment_length, fragment_length) else {
                continue;
            };

            let matches =
                self.index
                    .find_genomes_with_this_dna(fragment, fragment_length, exact_match_only);
            tally.record(&matches);
        }

        let results = tally.into_genome_matches(chunk_count, match_percent_threshold);

        debug!(
            query = %query.name(),
            chunk_count,
            related = results.len(),
            "Related genome search finished"
        );

        results
    }
}

impl SequenceIndex {
    /// Find indexed genomes related to `query`; see [`RelatednessEngine::find_related`].
    ///
    /// Returns an empty vector when `fragment_length` is below the minimum search
    /// length or when no genome reaches `match_percent_threshold`.
    #[must_use]
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_length: usize,
        exact_match_only: bool,
        match_percent_threshold: f64,
    ) -> Vec<GenomeMatch> {
        self.find_related_genomes_with_config(
            query,
            RelatednessConfig {
                fragment_length,
                exact_match_only,
                match_percent_threshold,
            },
        )
    }

    #[must_use]
    pub fn find_related_genomes_with_config(
        &self,
        query: &Genome,
        config: RelatednessConfig,
    ) -> Vec<GenomeMatch> {
        RelatednessEngine::with_config(self, config).find_related(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_index() -> SequenceIndex {
        let mut index = SequenceIndex::new(4);
        index.add_genome(Genome::new("alpha", "ACGTACGTTTTTGGGG"));
        index.add_genome(Genome::new("beta", "ACGTCCCCTTTTAAAA"));
        index.add_genome(Genome::new("gamma", "CCCCCCCCCCCCCCCC"));
        index
    }

    #[test]
    fn test_related_genomes_ranked() {
        let index = make_test_index();
        let query = Genome::new("query", "ACGTACGTTTTTGGGG");

        // Chunks: ACGT ACGT TTTT GGGG
        let results = index.find_related_genomes(&query, 4, true, 0.0);

        let names: Vec<_> = results.iter().map(|m| m.genome_name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert!(results[0].percent_match > results[1].percent_match);
    }

    #[test]
    fn test_query_name_excluded() {
        let index = make_test_index();
        let query = Genome::new("alpha", "ACGTACGTTTTTGGGG");

        let results = index.find_related_genomes(&query, 4, true, 0.0);
        assert!(results.iter().all(|m| m.genome_name != "alpha"));
        assert!(!results.is_empty());
    }

    #[test]
    fn test_fragment_length_below_minimum_rejected() {
        let index = make_test_index();
        let query = Genome::new("query", "ACGTACGTTTTTGGGG");
        assert!(index.find_related_genomes(&query, 3, false, 0.0).is_empty());
    }

    #[test]
    fn test_query_shorter_than_fragment_has_no_chunks() {
        let index = make_test_index();
        let query = Genome::new("query", "ACGTACG");
        assert!(index.find_related_genomes(&query, 8, false, 0.0).is_empty());
    }

    #[test]
    fn test_threshold_filters() {
        let index = make_test_index();
        let query = Genome::new("query", "CCCCCCCCCCCCCCCC");
        let results = index.find_related_genomes(&query, 16, true, 100.0);
        assert_eq!(
            results,
            vec![GenomeMatch {
                genome_name: "gamma".to_string(),
                percent_match: 100.0,
            }]
        );
        assert!(index
            .find_related_genomes(&query, 16, true, 100.1)
            .is_empty());
    }

    #[test]
    fn test_chunk_count_ignores_tail() {
        let query = Genome::new("query", "ACGTACGTACGTACGTAC");
        let config = |fragment_length| RelatednessConfig {
            fragment_length,
            ..RelatednessConfig::default()
        };

        assert_eq!(config(4).chunk_count(&query), 4);
        assert_eq!(config(18).chunk_count(&query), 1);
        assert_eq!(config(19).chunk_count(&query), 0);
        assert_eq!(config(0).chunk_count(&query), 0);
    }

    #[test]
    fn test_zero_fragment_length_finds_nothing() {
        let mut index = SequenceIndex::new(0);
        index.add_genome(Genome::new("target", "ACGT"));
        let query = Genome::new("query", "ACGT");
        assert!(index.find_related_genomes(&query, 0, false, 0.0).is_empty());
    }

    #[test]
    fn test_engine_default_config() {
        let mut index = SequenceIndex::new(4);
        index.add_genome(Genome::new("target", "ACGTACGTACGTACGT"));
        let engine = RelatednessEngine::new(&index);
        let query = Genome::new("query", "ACGTACGTACGTACGT");
        let results = engine.find_related(&query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].genome_name, "target");
    }
}
