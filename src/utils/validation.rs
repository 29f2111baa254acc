//! Centralized validation and helper functions.

/// Maximum number of genomes allowed in a single file (DOS protection)
pub const MAX_GENOMES: usize = 100_000;

/// Bases accepted in a genome sequence, after upper-casing
pub const DNA_BASES: [u8; 5] = [b'A', b'C', b'G', b'T', b'N'];

/// Check whether `base` is one of `A`, `C`, `G`, `T` or `N` (upper case only).
///
/// # Examples
///
/// ```
/// use genome_matcher::utils::validation::is_valid_base;
///
/// assert!(is_valid_base(b'A'));
/// assert!(is_valid_base(b'N'));
/// assert!(!is_valid_base(b'a'));
/// assert!(!is_valid_base(b'R'));
/// ```
#[must_use]
pub fn is_valid_base(base: u8) -> bool {
    DNA_BASES.contains(&base)
}

/// Position and value of the first base outside the DNA alphabet, if any
#[must_use]
pub fn find_invalid_base(sequence: &[u8]) -> Option<(usize, u8)> {
    sequence
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, base)| !is_valid_base(base))
}

/// Check if adding another genome would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new genome.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_genome_limit(count: usize) -> Option<String> {
    if count >= MAX_GENOMES {
        Some(format!(
            "Too many genomes: adding another would exceed maximum of {MAX_GENOMES}"
        ))
    } else {
        None
    }
}
