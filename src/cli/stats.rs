use clap::Args;

use crate::cli::{load_index, LibraryArgs, OutputFormat};
use crate::index::SequenceIndex;

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub library: LibraryArgs,
}

/// Execute stats subcommand
///
/// # Errors
///
/// Returns an error if the library cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = load_index(&args.library, verbose)?;
    let total_bases: usize = index.genomes().iter().map(|g| g.length()).sum();

    match format {
        OutputFormat::Text => print_text_stats(&index, total_bases),
        OutputFormat::Json => print_json_stats(&index, total_bases)?,
        OutputFormat::Tsv => print_tsv_stats(&index, total_bases),
    }

    Ok(())
}

fn print_text_stats(index: &SequenceIndex, total_bases: usize) {
    println!("Index Statistics");
    println!("{}", "=".repeat(60));
    println!("  Genomes: {}", index.genome_count());
    println!("  Total bases: {total_bases}");
    println!("  Minimum search length: {}", index.minimum_search_length());
    println!("  Anchors: {}", index.anchor_count());
    println!("  Trie nodes: {}", index.node_count());

    println!("\nGenomes:");
    for (id, genome) in index.genomes().iter().enumerate() {
        println!("  [{id}] {} ({} bases)", genome.name(), genome.length());
    }
}

fn print_json_stats(index: &SequenceIndex, total_bases: usize) -> anyhow::Result<()> {
    let genomes: Vec<serde_json::Value> = index
        .genomes()
        .iter()
        .map(|g| serde_json::json!({ "name": g.name(), "length": g.length() }))
        .collect();

    let output = serde_json::json!({
        "genome_count": index.genome_count(),
        "total_bases": total_bases,
        "minimum_search_length": index.minimum_search_length(),
        "anchor_count": index.anchor_count(),
        "node_count": index.node_count(),
        "genomes": genomes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_stats(index: &SequenceIndex, total_bases: usize) {
    println!("genome_count\ttotal_bases\tminimum_search_length\tanchor_count\tnode_count");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        index.genome_count(),
        total_bases,
        index.minimum_search_length(),
        index.anchor_count(),
        index.node_count()
    );
}
