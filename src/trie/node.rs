//! A single prefix position in the trie.

use std::collections::BTreeMap;

/// One trie node. Owned by its parent; the root is owned by the `Trie`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// The full inserted word that ends here, if any.
    word: Option<String>,
    /// Children keyed by the next character, iterated in character order.
    children: BTreeMap<char, Node>,
}

impl Node {
    /// Create a node with no word and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// The word ending at this node.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Whether an inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// The child reached by `c`.
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// All children in character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child reached by `c`, created if missing. The flag is true when
    /// the child was created.
    pub(crate) fn child_or_insert(&mut self, c: char) -> (&mut Node, bool) {
        let created = !self.children.contains_key(&c);
        (self.children.entry(c).or_default(), created)
    }

    /// Mark this node as the end of `word`. Returns false if it already was.
    pub(crate) fn mark(&mut self, word: &str) -> bool {
        if self.word.is_some() {
            return false;
        }
        self.word = Some(word.to_string());
        true
    }
}
