use super::MismatchBudget;

type NodeId = usize;

const ROOT: NodeId = 0;

// Nodes live in a flat arena; children refer to their slot by index
#[derive(Debug, Clone)]
struct Node<V> {
    label: u8,
    children: Vec<NodeId>,
    values: Vec<V>,
}

impl<V> Node<V> {
    fn new(label: u8) -> Self {
        Self {
            label,
            children: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// A multimap from byte-string keys to values, with lookups that tolerate a
/// single substituted symbol.
///
/// Substitutions are never allowed on the first symbol: every key returned by
/// an approximate [`find`](ApproxTrie::find) shares its first symbol with the query.
#[derive(Debug, Clone)]
pub struct ApproxTrie<V> {
    nodes: Vec<Node<V>>,
    value_count: usize,
}

impl<V> ApproxTrie<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(b'^')],
            value_count: 0,
        }
    }

    /// Drop every node and value, leaving an empty trie
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::new(b'^'));
        self.value_count = 0;
    }

    /// Store `value` under `key`, creating any missing nodes along the path.
    ///
    /// Values sharing a key are kept in insertion order. The empty key is ignored
    /// since the root never holds values.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: V) {
        let key = key.as_ref();
        if key.is_empty() {
            return;
        }

        let mut current = ROOT;
        for &symbol in key {
            current = self.child_or_insert(current, symbol);
        }

        self.nodes[current].values.push(value);
        self.value_count += 1;
    }

    /// Number of nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of values stored across all keys
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value_count == 0
    }

    fn child(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].label == symbol)
    }

    fn child_or_insert(&mut self, node: NodeId, symbol: u8) -> NodeId {
        if let Some(child) = self.child(node, symbol) {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(Node::new(symbol));
        self.nodes[node].children.push(child);
        child
    }
}

impl<V: Clone> ApproxTrie<V> {
    /// Return all values whose key equals `key`, plus, unless `exact_match_only`
    /// is set, those whose key differs from it in exactly one position after the first.
    ///
    /// Children are visited in the order they were first created, so results for
    /// a fixed trie are deterministic.
    #[must_use]
    pub fn find(&self, key: impl AsRef<[u8]>, exact_match_only: bool) -> Vec<V> {
        let budget = if exact_match_only {
            MismatchBudget::Spent
        } else {
            MismatchBudget::Available
        };

        let mut found = Vec::new();
        self.collect(ROOT, key.as_ref(), budget, &mut found);
        found
    }

    fn collect(&self, node: NodeId, key: &[u8], budget: MismatchBudget, found: &mut Vec<V>) {
        let Some((&symbol, rest)) = key.split_first() else {
            found.extend_from_slice(&self.nodes[node].values);
            return;
        };

        for &child in &self.nodes[node].children {
            if self.nodes[child].label == symbol {
                self.collect(child, rest, budget, found);
            } else if node != ROOT && budget.is_available() {
                self.collect(child, rest, budget.spend(), found);
            }
        }
    }
}

impl<V> Default for ApproxTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trie() -> ApproxTrie<i32> {
        let mut trie = ApproxTrie::new();
        trie.insert("hit", 1);
        trie.insert("hit", 2);
        trie.insert("hip", 10);
        trie.insert("hip", 20);
        trie.insert("hat", 7);
        trie.insert("hat", 8);
        trie.insert("hat", 9);
        trie.insert("a", 14);
        trie.insert("to", 22);
        trie.insert("to", 23);
        trie.insert("tap", 19);
        trie.insert("tap", 6);
        trie.insert("tap", 32);
        trie
    }

    #[test]
    fn test_new_trie_is_empty() {
        let trie: ApproxTrie<i32> = ApproxTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.find("ACGT", false).is_empty());
        assert!(trie.find("ACGT", true).is_empty());
    }

    #[test]
    fn test_exact_find_returns_values_in_insertion_order() {
        let trie = sample_trie();
        assert_eq!(trie.find("hit", true), vec![1, 2]);
        assert_eq!(trie.find("tap", true), vec![19, 6, 32]);
        assert_eq!(trie.find("a", true), vec![14]);
    }

    #[test]
    fn test_exact_find_ignores_prefixes_and_extensions() {
        let trie = sample_trie();
        assert!(trie.find("hi", true).is_empty());
        assert!(trie.find("hitt", true).is_empty());
        assert!(trie.find("t", true).is_empty());
    }

    #[test]
    fn test_approximate_find_allows_one_substitution() {
        let trie = sample_trie();
        // "hit" exact, "hip" and "hat" are one substitution away
        assert_eq!(trie.find("hit", false), vec![1, 2, 10, 20, 7, 8, 9]);
        // "sit" differs in its first symbol from everything stored
        assert!(trie.find("sit", false).is_empty());
    }

    #[test]
    fn test_approximate_find_rejects_two_substitutions() {
        let trie = sample_trie();
        // "hap" is one away from "hat" and "hip", two away from "hit"
        assert_eq!(trie.find("hap", false), vec![10, 20, 7, 8, 9]);
        assert!(trie.find("hap", true).is_empty());
        assert!(trie.find("hxx", false).is_empty());
    }

    #[test]
    fn test_no_substitution_on_first_symbol() {
        let mut trie = ApproxTrie::new();
        trie.insert("ACGT", 1);
        trie.insert("TCGT", 2);
        trie.insert("AAGT", 3);

        assert_eq!(trie.find("ACGT", false), vec![1, 3]);
        assert_eq!(trie.find("GCGT", false), Vec::<i32>::new());
    }

    #[test]
    fn test_empty_key_is_not_stored() {
        let mut trie = ApproxTrie::new();
        trie.insert("", 5);
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.find("", true).is_empty());
        assert!(trie.find("", false).is_empty());
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut trie = ApproxTrie::new();
        trie.insert("ACGT", 0);
        trie.insert("ACGA", 1);
        // root + A, C, G + T, A
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.value_count(), 2);
    }

    #[test]
    fn test_reset_discards_everything_and_is_reusable() {
        let mut trie = sample_trie();
        trie.reset();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.find("hit", false).is_empty());

        trie.insert("hit", 99);
        assert_eq!(trie.find("hit", true), vec![99]);

        trie.reset();
        trie.reset();
        assert!(trie.find("hit", true).is_empty());
    }
}
