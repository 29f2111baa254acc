//! Whole-genome relatedness scoring.
//!
//! - [`RelatednessEngine`]: Cuts a query genome into chunks and scores indexed genomes
//! - [`RelatednessConfig`]: Chunk length, substitution tolerance, and reporting threshold
//! - [`HitTally`]: Per-genome hit counting and ranking
//!
//! ## Scoring
//!
//! For a query of length `n` and chunk length `k`, the `n / k` whole chunks are each
//! searched in the index with a minimum match length of `k`. A genome's score is
//!
//! ```text
//! percent = 100 * (match records in that genome) / (number of chunks)
//! ```
//!
//! Every match record counts, so a chunk matching a genome at two positions counts
//! twice. Results are ordered by descending percentage, then by genome name.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{Genome, SequenceIndex};
//!
//! let mut index = SequenceIndex::new(4);
//! index.add_genome(Genome::new("target", "ACGTACGTTTTTGGGG"));
//!
//! let query = Genome::new("query", "ACGTTTTT");
//! let related = index.find_related_genomes(&query, 4, false, 50.0);
//!
//! for m in &related {
//!     println!("{}: {:.1}%", m.genome_name, m.percent_match);
//! }
//! ```

pub mod engine;
pub mod scoring;

pub use engine::{
    RelatednessConfig, RelatednessEngine, DEFAULT_FRAGMENT_LENGTH,
    DEFAULT_MATCH_PERCENT_THRESHOLD,
};
pub use scoring::HitTally;
