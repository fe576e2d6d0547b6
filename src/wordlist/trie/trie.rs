use std::fmt::{Debug, Formatter};

use tracing::trace;

use crate::alphabet::normalize;
use crate::wordlist::index::Index;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::{NodeArena, NodeId};

/// Prefix tree over case-normalized words.
///
/// Every key is passed through [`normalize`] before it touches the tree, so
/// `insert("Cat")` and `contains("cAT")` agree. The empty word is never stored.
pub struct Trie {
    pub(super) nodes: NodeArena,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: NodeArena::new(),
            word_count: 0,
        }
    }

    /// Adds `word`. Returns `true` if it was not already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = self.nodes.add_child(current, c);
        }

        let end = &mut self.nodes[current];
        if end.is_terminating {
            return false;
        }
        end.is_terminating = true;
        self.word_count += 1;
        trace!(word = %word, "inserted");
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.find_node(&word)
            .map(|id| self.nodes[id].is_terminating)
            .unwrap_or(false)
    }

    /// Removes `word`, pruning nodes that no longer lead to any stored word.
    /// Returns `false` (and changes nothing) if the word was not stored.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        let end = match self.find_node(&word) {
            Some(id) if self.nodes[id].is_terminating => id,
            _ => return false,
        };

        self.nodes[end].is_terminating = false;
        self.word_count -= 1;
        if self.nodes[end].is_leaf() {
            self.prune_from(end);
        }
        trace!(word = %word, "removed");
        true
    }

    /// Walks upward from a non-terminating leaf, detaching nodes until an
    /// ancestor that is terminating or still has children is reached.
    fn prune_from(&mut self, leaf: NodeId) {
        let mut current = leaf;
        while current != NodeId::ROOT {
            let node = &self.nodes[current];
            if node.is_terminating || !node.is_leaf() {
                break;
            }
            match self.nodes.detach(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    /// Follows an already-normalized character chain from the root.
    pub(super) fn find_node(&self, normalized: &str) -> Option<NodeId> {
        normalized
            .chars()
            .try_fold(NodeId::ROOT, |id, c| self.nodes[id].child(c))
    }

    /// Number of stored words.
    pub fn count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every stored word in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.nodes, NodeId::ROOT, String::new())
    }

    pub fn words(&self) -> Vec<String> {
        self.iter().collect()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> bool {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn remove(&mut self, word: &str) -> bool {
        Trie::remove(self, word)
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        iter.into_iter().for_each(|word| {
            self.insert(word.as_ref());
        });
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
