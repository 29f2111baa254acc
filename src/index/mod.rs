//! Approximate-match indexing of genomes.
//!
//! - [`ApproxTrie`]: Multimap trie with exact and single-substitution lookup
//! - [`SequenceIndex`]: Anchors every fixed-length window of every added genome in an
//!   [`ApproxTrie`] and extends anchor hits into fragment matches
//!
//! ## Mismatch budget
//!
//! A fragment may match with at most one substituted base across its whole matched
//! length. The budget is shared between the anchor probe and the extension that
//! follows it: an anchor whose window is not identical to the fragment prefix has
//! already used it.

pub mod sequence_index;
pub mod trie;

pub use sequence_index::{Anchor, SequenceIndex, DEFAULT_MIN_SEARCH_LENGTH};
pub use trie::ApproxTrie;

/// Remaining allowance for substituted bases, threaded explicitly through searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MismatchBudget {
    Available,
    Spent,
}

impl MismatchBudget {
    pub(crate) fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    #[must_use]
    pub(crate) fn spend(self) -> Self {
        Self::Spent
    }
}
