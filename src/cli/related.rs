use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_index, LibraryArgs, OutputFormat};
use crate::core::genome::Genome;
use crate::core::types::{GenomeMatch, Relatedness};
use crate::matching::engine::{
    RelatednessConfig, RelatednessEngine, DEFAULT_FRAGMENT_LENGTH,
    DEFAULT_MATCH_PERCENT_THRESHOLD,
};
use crate::parsing;

#[derive(Args)]
pub struct RelatedArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    /// FASTA file of query genomes; each is scored separately
    #[arg(short, long, required = true)]
    pub query: PathBuf,

    /// Length of the chunks the query is cut into
    #[arg(short = 'l', long, default_value_t = DEFAULT_FRAGMENT_LENGTH)]
    pub fragment_length: usize,

    /// Minimum percentage of matching chunks (0-100)
    #[arg(short, long, default_value_t = DEFAULT_MATCH_PERCENT_THRESHOLD)]
    pub threshold: f64,

    /// Only count chunk matches without a substituted base
    #[arg(long)]
    pub exact: bool,
}

/// Related genomes found for one query genome
struct QueryResult<'a> {
    query: &'a Genome,
    chunk_count: usize,
    matches: Vec<GenomeMatch>,
}

/// Execute related subcommand
///
/// # Errors
///
/// Returns an error if the library or query file cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RelatedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = load_index(&args.library, verbose)?;

    let queries = parsing::fasta::parse_fasta_file(&args.query)
        .with_context(|| format!("Failed to load query genomes from {}", args.query.display()))?;

    if args.fragment_length < index.minimum_search_length() {
        eprintln!(
            "Warning: fragment length {} is below the minimum search length {}, nothing can match",
            args.fragment_length,
            index.minimum_search_length()
        );
    }

    let config = RelatednessConfig {
        fragment_length: args.fragment_length,
        exact_match_only: args.exact,
        match_percent_threshold: args.threshold,
    };
    let engine = RelatednessEngine::with_config(&index, config);

    let results: Vec<QueryResult> = queries
        .iter()
        .map(|query| QueryResult {
            query,
            chunk_count: engine.config().chunk_count(query),
            matches: engine.find_related(query),
        })
        .collect();

    if verbose {
        eprintln!(
            "Scored {} query genome(s) in {}-base chunks",
            results.len(),
            args.fragment_length
        );
    }

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results, &args)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn relatedness_label(percent: f64) -> &'static str {
    match Relatedness::from_percent(percent) {
        Relatedness::Identical => "IDENTICAL",
        Relatedness::High => "HIGH",
        Relatedness::Medium => "MEDIUM",
        Relatedness::Low => "LOW",
    }
}

fn print_text_results(results: &[QueryResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\nQuery: {} ({} bases, {} chunks)",
            result.query.name(),
            result.query.length(),
            result.chunk_count
        );

        if result.matches.is_empty() {
            println!("   No related genomes found.");
            continue;
        }

        for (rank, m) in result.matches.iter().enumerate() {
            println!(
                "   #{} {} {:.2}% ({})",
                rank + 1,
                m.genome_name,
                m.percent_match,
                relatedness_label(m.percent_match)
            );
        }
    }
}

fn print_json_results(results: &[QueryResult], args: &RelatedArgs) -> anyhow::Result<()> {
    let queries: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            let matches: Vec<serde_json::Value> = result
                .matches
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "genome_name": m.genome_name,
                        "percent_match": m.percent_match,
                        "relatedness": Relatedness::from_percent(m.percent_match),
                    })
                })
                .collect();

            serde_json::json!({
                "query": result.query.name(),
                "length": result.query.length(),
                "chunk_count": result.chunk_count,
                "matches": matches,
            })
        })
        .collect();

    let output = serde_json::json!({
        "fragment_length": args.fragment_length,
        "exact_match_only": args.exact,
        "match_percent_threshold": args.threshold,
        "queries": queries,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[QueryResult]) {
    println!("query\tgenome\tpercent_match\trelatedness");
    for result in results {
        for m in &result.matches {
            println!(
                "{}\t{}\t{:.4}\t{:?}",
                result.query.name(),
                m.genome_name,
                m.percent_match,
                Relatedness::from_percent(m.percent_match)
            );
        }
    }
}
