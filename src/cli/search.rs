use clap::Args;

use crate::cli::{load_index, LibraryArgs, OutputFormat};
use crate::core::types::DnaMatch;

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    /// DNA fragment to look for
    #[arg(long, required = true)]
    pub fragment: String,

    /// Minimum number of bases a match must cover (defaults to the fragment length)
    #[arg(short = 'm', long)]
    pub min_length: Option<usize>,

    /// Only report matches without a substituted base
    #[arg(long)]
    pub exact: bool,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the library cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = load_index(&args.library, verbose)?;

    let fragment = args.fragment.to_ascii_uppercase();
    let min_length = args.min_length.unwrap_or(fragment.len());

    if fragment.len() < index.minimum_search_length() || min_length < index.minimum_search_length()
    {
        eprintln!(
            "Warning: fragment and minimum length must be at least {} bases",
            index.minimum_search_length()
        );
    }

    let matches = index.find_genomes_with_this_dna(&fragment, min_length, args.exact);

    if matches.is_empty() {
        eprintln!("No matches found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&fragment, &matches, args.exact),
        OutputFormat::Json => print_json_results(&fragment, min_length, args.exact, &matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(fragment: &str, matches: &[DnaMatch], exact: bool) {
    let mode = if exact { "exact" } else { "at most one substitution" };
    println!(
        "{} match(es) for {} ({} bases, {mode})",
        matches.len(),
        fragment,
        fragment.len()
    );
    println!("{}", "=".repeat(60));

    for (i, m) in matches.iter().enumerate() {
        println!(
            "#{} {}: length {} at position {}",
            i + 1,
            m.genome_name,
            m.length,
            m.position
        );
    }
}

fn print_json_results(
    fragment: &str,
    min_length: usize,
    exact: bool,
    matches: &[DnaMatch],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "fragment": fragment,
        "minimum_length": min_length,
        "exact_match_only": exact,
        "matches": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[DnaMatch]) {
    println!("genome\tposition\tlength");
    for m in matches {
        println!("{}\t{}\t{}", m.genome_name, m.position, m.length);
    }
}
