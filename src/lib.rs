//! # genome-matcher
//!
//! A library for finding DNA fragments and related genomes across a library of genomes.
//!
//! Every window of a fixed length (the *minimum search length*) in every indexed genome
//! is anchored in a prefix tree. Queries probe the tree with the first window of a
//! fragment, tolerating one substituted base, and extend each hit against the genome.
//!
//! ## Features
//!
//! - **Approximate lookup**: [`ApproxTrie`] returns values whose key matches exactly or
//!   with one substitution after the first symbol
//! - **Fragment search**: Maximal matches with at most one substituted base in total
//! - **Relatedness scoring**: Percentage of query chunks found in each indexed genome
//! - **FASTA loading**: Plain or gzip-compressed multi-record FASTA
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{DnaMatch, Genome, SequenceIndex};
//!
//! let mut index = SequenceIndex::new(4);
//! index.add_genome(Genome::new("G1", "ACTGACTG"));
//! index.add_genome(Genome::new("G2", "ACTGACTT"));
//!
//! let matches = index.find_genomes_with_this_dna("ACTGACTG", 6, true);
//! assert_eq!(
//!     matches,
//!     vec![DnaMatch::new("G1", 0, 8), DnaMatch::new("G2", 0, 7)]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`](crate::core): Genomes and match result types
//! - [`index`]: The approximate-match trie and the sequence index built on it
//! - [`matching`]: Whole-genome relatedness scoring
//! - [`parsing`]: FASTA loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::genome::{Genome, GenomeError};
pub use crate::core::types::*;
pub use index::{ApproxTrie, SequenceIndex};
pub use matching::engine::{RelatednessConfig, RelatednessEngine};
