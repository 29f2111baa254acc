use serde::{Deserialize, Serialize};

/// A maximal extension of one anchor hit in an indexed genome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaMatch {
    /// Name of the genome containing the match
    pub genome_name: String,

    /// 0-based start of the match in that genome
    pub position: usize,

    /// Number of fragment bases covered, including at most one substitution
    pub length: usize,
}

impl DnaMatch {
    pub fn new(genome_name: impl Into<String>, position: usize, length: usize) -> Self {
        Self {
            genome_name: genome_name.into(),
            position,
            length,
        }
    }
}

/// A genome judged related to a query, with the share of query chunks it matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeMatch {
    pub genome_name: String,

    /// Percentage of query chunks that produced a match record in this genome
    pub percent_match: f64,
}

impl std::fmt::Display for GenomeMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2}%)", self.genome_name, self.percent_match)
    }
}

/// Confidence bucket for a relatedness percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relatedness {
    Low,
    Medium,
    High,
    Identical,
}

impl Relatedness {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Identical
        } else if percent >= 80.0 {
            Self::High
        } else if percent >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relatedness_buckets() {
        assert_eq!(Relatedness::from_percent(100.0), Relatedness::Identical);
        assert_eq!(Relatedness::from_percent(150.0), Relatedness::Identical);
        assert_eq!(Relatedness::from_percent(85.0), Relatedness::High);
        assert_eq!(Relatedness::from_percent(40.0), Relatedness::Medium);
        assert_eq!(Relatedness::from_percent(12.5), Relatedness::Low);
    }

    #[test]
    fn test_genome_match_display() {
        let m = GenomeMatch {
            genome_name: "Ferroplasma acidarmanus".to_string(),
            percent_match: 62.5,
        };
        assert_eq!(m.to_string(), "Ferroplasma acidarmanus (62.50%)");
    }
}
