//! Loaders that turn genome files into [`Genome`](crate::core::Genome) values.
//!
//! Only FASTA is supported. A library file holds one record per genome:
//!
//! ```text
//! >Halobacterium_jilantaiense
//! ACGTTGCA...
//! >Halorubrum_chaoviator
//! TTGACCNN...
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_matcher::parsing::fasta::parse_fasta_file;
//! use std::path::Path;
//!
//! let genomes = parse_fasta_file(Path::new("library.fa")).unwrap();
//! ```

use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid base '{base}' at position {position} in genome '{genome}'")]
    InvalidBase {
        genome: String,
        position: usize,
        base: char,
    },

    #[error("Too many genomes: {0} exceeds maximum allowed (100000)")]
    TooManyGenomes(usize),
}
