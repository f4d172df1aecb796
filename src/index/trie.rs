//! Prefix tree with multi-valued terminals, used as the inverted index.
//!
//! Nodes live in an arena and refer to their children by index. Each node
//! keeps its children in first-insertion order, which fixes the traversal
//! order of [`IndexTrie::terms`] for a given insertion history. The walk is
//! depth-first and pre-order: a term is yielded before every term that
//! extends it, so `"do"` comes before `"dog"` even when `"dog"` was inserted
//! first. The terminal marker is a separate field on the node, so no
//! character is reserved.

use std::iter::FusedIterator;

type NodeId = usize;

const ROOT: NodeId = 0;

struct TrieNode<V> {
    /// (edge character, child) in first-insertion order.
    children: Vec<(char, NodeId)>,
    /// Present only on nodes that end an inserted term.
    values: Option<Vec<V>>,
}

impl<V> TrieNode<V> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            values: None,
        }
    }

    fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(edge, _)| *edge == ch)
            .map(|&(_, id)| id)
    }
}

/// Trie mapping terms to ordered lists of values (postings).
pub struct IndexTrie<V> {
    nodes: Vec<TrieNode<V>>,
    term_count: usize,
}

impl<V> IndexTrie<V> {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            term_count: 0,
        }
    }

    /// Append a value to `term`'s list, creating the path and the list as
    /// needed. The empty term is ignored: the root never becomes terminal.
    pub fn insert<F>(&mut self, term: &str, make_value: F)
    where
        F: FnOnce() -> V,
    {
        if term.is_empty() {
            return;
        }

        let mut cursor = ROOT;
        for ch in term.chars() {
            cursor = match self.nodes[cursor].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[cursor].children.push((ch, next));
                    next
                }
            };
        }

        let node = &mut self.nodes[cursor];
        match node.values.as_mut() {
            Some(values) => values.push(make_value()),
            None => {
                node.values = Some(vec![make_value()]);
                self.term_count += 1;
            }
        }
    }

    /// Values recorded for exactly `term`, in insertion order.
    ///
    /// `None` when the path is missing, stops at a non-terminal node, or
    /// `term` is empty.
    pub fn lookup(&self, term: &str) -> Option<&[V]> {
        if term.is_empty() {
            return None;
        }

        let mut cursor = ROOT;
        for ch in term.chars() {
            cursor = self.nodes[cursor].child(ch)?;
        }
        self.nodes[cursor].values.as_deref()
    }

    /// Whether `term` has been inserted.
    pub fn contains(&self, term: &str) -> bool {
        self.lookup(term).is_some()
    }

    /// Depth-first sequence of every indexed term. Each call starts a new
    /// traversal.
    pub fn terms(&self) -> impl Iterator<Item = String> + '_ {
        self.entries().map(|(term, _)| term)
    }

    /// Depth-first sequence of `(term, values)` pairs, same order as
    /// [`IndexTrie::terms`].
    pub fn entries(&self) -> Entries<'_, V> {
        Entries {
            trie: self,
            stack: vec![Frame {
                node: ROOT,
                depth: 0,
                edge: None,
            }],
            path: Vec::new(),
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.term_count
    }

    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<V> Default for IndexTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

struct Frame {
    node: NodeId,
    /// Length of the path leading to this node's parent.
    depth: usize,
    edge: Option<char>,
}

/// Iterator returned by [`IndexTrie::entries`].
pub struct Entries<'a, V> {
    trie: &'a IndexTrie<V>,
    stack: Vec<Frame>,
    path: Vec<char>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (String, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            // Rewind the path to the parent, then step onto this node.
            self.path.truncate(frame.depth);
            if let Some(ch) = frame.edge {
                self.path.push(ch);
            }

            let node = &self.trie.nodes[frame.node];
            let depth = self.path.len();
            for &(ch, child) in node.children.iter().rev() {
                self.stack.push(Frame {
                    node: child,
                    depth,
                    edge: Some(ch),
                });
            }

            if let Some(values) = node.values.as_deref() {
                return Some((self.path.iter().collect(), values));
            }
        }
        None
    }
}

impl<V> FusedIterator for Entries<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_lookup() {
        let mut trie = IndexTrie::new();
        trie.insert("cat", || 7);
        assert_eq!(trie.lookup("cat"), Some(&[7][..]));
        assert_eq!(trie.lookup("ca"), None);
        assert_eq!(trie.lookup("cats"), None);
        assert_eq!(trie.lookup("dog"), None);
    }

    #[test]
    fn test_values_append_in_order() {
        let mut trie = IndexTrie::new();
        trie.insert("cat", || 1);
        trie.insert("cat", || 2);
        trie.insert("cat", || 3);
        assert_eq!(trie.lookup("cat"), Some(&[1, 2, 3][..]));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_shared_prefix_reuses_nodes() {
        let mut trie = IndexTrie::new();
        trie.insert("car", || 0);
        let after_car = trie.node_count();
        trie.insert("cat", || 1);
        assert_eq!(trie.node_count(), after_car + 1);
        trie.insert("ca", || 2);
        assert_eq!(trie.node_count(), after_car + 1);
        assert_eq!(trie.lookup("ca"), Some(&[2][..]));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_empty_term() {
        let mut trie: IndexTrie<u32> = IndexTrie::new();
        trie.insert("", || 1);
        assert!(trie.is_empty());
        assert_eq!(trie.lookup(""), None);
        assert!(!trie.contains(""));
        assert_eq!(trie.terms().count(), 0);
    }

    #[test]
    fn test_terms_depth_first_insertion_order() {
        let mut trie = IndexTrie::new();
        for term in ["dog", "cat", "do", "cart", "a"] {
            trie.insert(term, || ());
        }
        let terms: Vec<String> = trie.terms().collect();
        assert_eq!(terms, vec!["do", "dog", "cat", "cart", "a"]);
    }

    #[test]
    fn test_terms_prefix_before_extension() {
        let mut trie = IndexTrie::new();
        trie.insert("dogs", || ());
        trie.insert("dog", || ());
        trie.insert("do", || ());
        let terms: Vec<String> = trie.terms().collect();
        assert_eq!(terms, vec!["do", "dog", "dogs"]);
    }

    #[test]
    fn test_terms_restartable() {
        let mut trie = IndexTrie::new();
        trie.insert("x", || 0);
        trie.insert("xy", || 0);
        let first: Vec<String> = trie.terms().collect();
        let second: Vec<String> = trie.terms().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_entries_carry_values() {
        let mut trie = IndexTrie::new();
        trie.insert("ab", || 'a');
        trie.insert("ab", || 'b');
        trie.insert("b", || 'c');
        let entries: Vec<(String, Vec<char>)> = trie
            .entries()
            .map(|(term, values)| (term, values.to_vec()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("ab".to_string(), vec!['a', 'b']),
                ("b".to_string(), vec!['c']),
            ]
        );
    }

    #[test]
    fn test_sentinel_like_characters_are_ordinary() {
        let mut trie = IndexTrie::new();
        trie.insert("$", || 1);
        trie.insert("a$", || 2);
        assert_eq!(trie.lookup("$"), Some(&[1][..]));
        assert_eq!(trie.lookup("a"), None);
        let terms: Vec<String> = trie.terms().collect();
        assert_eq!(terms, vec!["$", "a$"]);
    }
}
