//! Core data types for genome indexing and matching.
//!
//! - [`Genome`]: A named DNA sequence with bounds-checked extraction
//! - [`DnaMatch`]: One extended fragment hit in an indexed genome
//! - [`GenomeMatch`]: A genome related to a query, with its match percentage
//! - [`Relatedness`]: Coarse classification of a match percentage

pub mod genome;
pub mod types;

pub use genome::{Genome, GenomeError};
pub use types::{DnaMatch, GenomeMatch, Relatedness};
