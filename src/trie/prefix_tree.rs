//! Prefix tree over strings.

use serde::{Deserialize, Serialize};

use super::Node;

/// A prefix tree storing whole words, one character per edge.
///
/// Lookups cost O(k) in the length of the query. There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, creating nodes along its path as needed.
    ///
    /// Returns true if the word was not already present. The empty word marks
    /// the root.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = &mut self.root;
        let mut created = 0usize;
        for c in word.chars() {
            let (child, was_created) = current.child_or_insert(c);
            if was_created {
                created += 1;
            }
            current = child;
        }

        let added = current.mark(word);
        if added {
            self.len += 1;
        }
        log::trace!(
            "insert {:?}: {} new nodes, added={}",
            word,
            created,
            added
        );
        added
    }

    /// Whether exactly `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.locate(word).is_some_and(Node::is_terminal)
    }

    /// True when the path for `prefix` exists and does not itself end an
    /// inserted word.
    ///
    /// An exact word match reports false: with only "he" stored,
    /// `starts_with("he")` is false while `starts_with("h")` is true. Use
    /// [`Trie::has_prefix`] for the inclusive check.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.locate(prefix).is_some_and(|node| !node.is_terminal())
    }

    /// Whether any stored word begins with `prefix`, the word itself included.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !self.is_empty() && self.locate(prefix).is_some()
    }

    /// Every stored word that begins with `prefix`.
    ///
    /// Words come out in pre-order: the prefix itself first if it was
    /// inserted, then each child subtree in character order. Unknown prefixes
    /// yield an empty list.
    pub fn prefix_match(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.locate(prefix) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut stack: Vec<(String, &Node)> = vec![(prefix.to_string(), start)];

        while let Some((spelled, node)) = stack.pop() {
            // Children go on in reverse so the smallest character pops first.
            let children: Vec<(char, &Node)> = node.children().collect();
            for &(c, child) in children.iter().rev() {
                let mut next = spelled.clone();
                next.push(c);
                stack.push((next, child));
            }
            if node.is_terminal() {
                matches.push(spelled);
            }
        }

        log::debug!("prefix {:?} matched {} words", prefix, matches.len());
        matches
    }

    /// All stored words in character order.
    pub fn words(&self) -> Vec<String> {
        self.prefix_match("")
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The node at the end of the path spelling `prefix`.
    pub fn locate(&self, prefix: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in prefix.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl From<Vec<String>> for Trie {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<Trie> for Vec<String> {
    fn from(trie: Trie) -> Self {
        trie.words()
    }
}
