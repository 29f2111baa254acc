//! Command-line interface for genome-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find a DNA fragment across a library of genomes
//! - **related**: Rank library genomes by how much of a query genome they contain
//! - **stats**: Summarize the index built from a library
//!
//! ## Usage
//!
//! ```text
//! # Find a fragment, allowing one substituted base
//! genome-matcher search library.fa --fragment ACGAATCACGTGCGAATTC
//!
//! # Exact matches covering at least 25 bases, as JSON
//! genome-matcher search library.fa --fragment ACGAATCACGTGCGAATTCACGT --min-length 25 --exact --format json
//!
//! # Genomes sharing at least 20% of 16-base chunks with each query genome
//! genome-matcher related library.fa --query unknown.fa --fragment-length 16 --threshold 20
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::index::{SequenceIndex, DEFAULT_MIN_SEARCH_LENGTH};
use crate::parsing;

pub mod related;
pub mod search;
pub mod stats;

#[derive(Parser)]
#[command(name = "genome-matcher")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Search DNA fragments and related genomes in a genome library")]
#[command(
    long_about = "genome-matcher indexes every fixed-length window of a library of genomes.\n\nIt then answers two kinds of query:\n- Where does a DNA fragment occur, allowing at most one substituted base\n- Which library genomes are related to a query genome, by share of matching chunks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every occurrence of a DNA fragment
    Search(search::SearchArgs),

    /// Find library genomes related to each genome in a query file
    Related(related::RelatedArgs),

    /// Report index statistics for a library
    Stats(stats::StatsArgs),
}

/// Genome library shared by all commands
#[derive(clap::Args)]
pub struct LibraryArgs {
    /// FASTA files holding the genomes to index (.fa, .fasta, .fna, optionally .gz)
    #[arg(required = true)]
    pub genomes: Vec<PathBuf>,

    /// Length of the windows anchored in the index
    #[arg(short = 'k', long, default_value_t = DEFAULT_MIN_SEARCH_LENGTH)]
    pub min_search_length: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load every library file and index its genomes in file order
///
/// # Errors
///
/// Returns an error if any library file fails to load.
pub fn load_index(library: &LibraryArgs, verbose: bool) -> anyhow::Result<SequenceIndex> {
    let mut index = SequenceIndex::new(library.min_search_length);

    for path in &library.genomes {
        let genomes = parsing::fasta::parse_fasta_file(path)
            .with_context(|| format!("Failed to load genomes from {}", path.display()))?;

        if verbose {
            eprintln!("Loaded {} genomes from {}", genomes.len(), path.display());
        }

        for genome in genomes {
            index.add_genome(genome);
        }
    }

    if verbose {
        eprintln!(
            "Indexed {} genomes ({} anchors of {} bases)",
            index.genome_count(),
            index.anchor_count(),
            index.minimum_search_length()
        );
    }

    Ok(index)
}
