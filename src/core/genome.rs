use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    #[error("Range {position}+{length} is outside genome '{genome}' of length {genome_length}")]
    OutOfRange {
        genome: String,
        position: usize,
        length: usize,
        genome_length: usize,
    },
}

/// A named DNA sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    name: String,
    sequence: String,
}

impl Genome {
    /// Create a genome from a name and its bases.
    ///
    /// The sequence is stored verbatim; alphabet checks happen when loading
    /// from FASTA (see [`crate::parsing::fasta`]).
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// Total number of bases
    #[must_use]
    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Extract `length` bases starting at `position`.
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::OutOfRange` if `position + length` runs past the end
    /// of the sequence.
    pub fn extract(&self, position: usize, length: usize) -> Result<&str, GenomeError> {
        position
            .checked_add(length)
            .and_then(|end| self.sequence.get(position..end))
            .ok_or_else(|| GenomeError::OutOfRange {
                genome: self.name.clone(),
                position,
                length,
                genome_length: self.length(),
            })
    }
}
