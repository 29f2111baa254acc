//! Loader for FASTA genome libraries using noodles.
//!
//! Every record becomes a [`Genome`]. Bases are upper-cased and must be one of
//! `A`, `C`, `G`, `T` or `N`; a record with an empty name or sequence, or any
//! other base, fails the whole load.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{info, warn};

use crate::core::genome::Genome;
use crate::parsing::ParseError;
use crate::utils::validation::{check_genome_limit, find_invalid_base};

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load every genome in a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// a record is malformed, `ParseError::InvalidFormat` for empty names, empty
/// sequences or an empty file, `ParseError::InvalidBase` for bases outside the DNA
/// alphabet, or `ParseError::TooManyGenomes` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Genome>, ParseError> {
    if !is_fasta_file(path) {
        warn!(
            path = %path.display(),
            "File does not have a FASTA extension, parsing as FASTA anyway"
        );
    }

    let file = std::fs::File::open(path)?;

    let genomes = if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_fasta_reader(BufReader::new(file))?
    };

    info!(
        path = %path.display(),
        genomes = genomes.len(),
        "Loaded genomes from FASTA"
    );

    Ok(genomes)
}

/// The whole header line after `>`: the record name, then its description if any
fn genome_name(record: &fasta::Record) -> String {
    let name = String::from_utf8_lossy(record.name());
    match record.description() {
        Some(description) => format!("{name} {}", String::from_utf8_lossy(description)),
        None => name.into_owned(),
    }
}

/// Load every genome from FASTA text held in any buffered reader.
///
/// # Errors
///
/// Same as [`parse_fasta_file`], minus the file handling.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<Genome>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut genomes = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check genome limit for DOS protection
        if check_genome_limit(genomes.len()).is_some() {
            return Err(ParseError::TooManyGenomes(genomes.len()));
        }

        let name = genome_name(&record);
        if name.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Record {} has an empty name",
                genomes.len() + 1
            )));
        }

        let bases = record.sequence().as_ref().to_ascii_uppercase();
        if bases.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Genome '{name}' has an empty sequence"
            )));
        }

        if let Some((position, base)) = find_invalid_base(&bases) {
            return Err(ParseError::InvalidBase {
                genome: name,
                position,
                base: char::from(base),
            });
        }

        // Validated ASCII, so the conversion is lossless
        let sequence = String::from_utf8_lossy(&bases).into_owned();
        genomes.push(Genome::new(name, sequence));
    }

    if genomes.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(genomes)
}
