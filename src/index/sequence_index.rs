use tracing::{debug, warn};

use crate::core::genome::Genome;
use crate::core::types::DnaMatch;
use crate::index::trie::ApproxTrie;
use crate::index::MismatchBudget;

/// Default anchor window length
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 10;

/// One indexed window: which genome it came from and where it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub genome_id: usize,
    pub offset: usize,
}

/// Index over a growing set of genomes.
///
/// Every window of `minimum_search_length` bases in every added genome is stored
/// as an [`Anchor`] keyed by its bases. Fragment queries probe the anchors and then
/// extend each hit base by base against the genome itself.
///
/// Construction takes `&mut self` and queries take `&self`, so the borrow checker
/// enforces the single-writer, many-readers discipline the index relies on.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    minimum_search_length: usize,
    genomes: Vec<Genome>,
    anchors: ApproxTrie<Anchor>,
}

impl SequenceIndex {
    #[must_use]
    pub fn new(minimum_search_length: usize) -> Self {
        Self {
            minimum_search_length,
            genomes: Vec::new(),
            anchors: ApproxTrie::new(),
        }
    }

    /// Append `genome` and anchor each of its windows.
    ///
    /// Genomes shorter than the minimum search length are kept (so they can be
    /// listed) but contribute no anchors.
    pub fn add_genome(&mut self, genome: Genome) {
        let genome_id = self.genomes.len();
        let window = self.minimum_search_length;

        if genome.length() < window {
            warn!(
                genome = %genome.name(),
                length = genome.length(),
                minimum_search_length = window,
                "Genome is shorter than the minimum search length, nothing indexed"
            );
        } else {
            for offset in 0..=genome.length() - window {
                if let Ok(key) = genome.extract(offset, window) {
                    self.anchors.insert(key, Anchor { genome_id, offset });
                }
            }

            debug!(
                genome = %genome.name(),
                genome_id,
                anchors = genome.length() - window + 1,
                "Indexed genome"
            );
        }

        self.genomes.push(genome);
    }

    #[must_use]
    pub fn minimum_search_length(&self) -> usize {
        self.minimum_search_length
    }

    /// Genomes in the order they were added; a genome's position is its id
    #[must_use]
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub(crate) fn genome(&self, genome_id: usize) -> Option<&Genome> {
        self.genomes.get(genome_id)
    }

    #[must_use]
    pub fn genome_count(&self) -> usize {
        self.genomes.len()
    }

    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.anchors.value_count()
    }

    /// Number of trie nodes backing the anchors, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.anchors.node_count()
    }

    /// Find every place `fragment` occurs across the indexed genomes, allowing at
    /// most one substituted base unless `exact_match_only` is set.
    ///
    /// Each anchor hit on the first `minimum_search_length` bases is extended as far
    /// as the fragment and genome allow; hits covering fewer than `minimum_length`
    /// bases are dropped. Results follow anchor discovery order.
    ///
    /// Returns an empty vector when nothing matches, and also when the fragment or
    /// `minimum_length` is shorter than the minimum search length.
    #[must_use]
    pub fn find_genomes_with_this_dna(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_match_only: bool,
    ) -> Vec<DnaMatch> {
        let window = self.minimum_search_length;

        if fragment.len() < window || minimum_length < window {
            debug!(
                fragment_length = fragment.len(),
                minimum_length,
                minimum_search_length = window,
                "Fragment query below minimum search length, rejected"
            );
            return Vec::new();
        }

        let fragment = fragment.as_bytes();
        let prefix = &fragment[..window];

        let mut matches = Vec::new();

        for anchor in self.anchors.find(prefix, exact_match_only) {
            let Some(genome) = self.genome(anchor.genome_id) else {
                continue;
            };

            let window_is_exact = genome
                .extract(anchor.offset, window)
                .is_ok_and(|bases| bases.as_bytes() == prefix);

            let budget = if window_is_exact && !exact_match_only {
                MismatchBudget::Available
            } else {
                MismatchBudget::Spent
            };

            let length = extend_anchor(genome, anchor.offset, fragment, window, budget);

            if length >= minimum_length {
                matches.push(DnaMatch::new(genome.name(), anchor.offset, length));
            }
        }

        matches
    }
}

impl Default for SequenceIndex {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEARCH_LENGTH)
    }
}

/// Extend an anchor at `start` past its first `matched` bases, returning how many
/// fragment bases it covers. A mismatch spends the budget; a second one, or the end
/// of the fragment or genome, stops the extension.
fn extend_anchor(
    genome: &Genome,
    start: usize,
    fragment: &[u8],
    matched: usize,
    mut budget: MismatchBudget,
) -> usize {
    let mut length = matched;

    while length < fragment.len() {
        let Ok(base) = genome.extract(start + length, 1) else {
            break;
        };

        if base.as_bytes() != &fragment[length..=length] {
            if !budget.is_available() {
                break;
            }
            budget = budget.spend();
        }

        length += 1;
    }

    length
}
