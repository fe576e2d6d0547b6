use crate::alphabet::normalize;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Stored words beginning with `prefix`, the prefix itself included when
    /// it is a stored word. Sorted; empty when nothing matches.
    pub fn find_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.prefixed(prefix).collect()
    }

    /// Lazy form of [`Trie::find_words_with_prefix`].
    pub fn prefixed(&self, prefix: &str) -> Words<'_> {
        let prefix = normalize(prefix);
        match self.find_node(&prefix) {
            Some(id) => Words::new(&self.nodes, id, prefix),
            None => Words::empty(&self.nodes),
        }
    }

    /// Whether any stored word begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.prefixed(prefix).next().is_some()
    }
}
