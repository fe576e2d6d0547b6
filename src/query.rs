use tracing::debug;

use crate::grid::config::EnumerationConfig;
use crate::grid::paths::{EnumerationStats, PathEnumerator};
use crate::grid::Grid;
use crate::wordlist::trie::Trie;

/// Answers membership queries against every path string of one grid.
pub struct QueryRunner {
    trie: Trie,
    stats: EnumerationStats,
}

impl QueryRunner {
    pub fn new(grid: &Grid, config: EnumerationConfig) -> QueryRunner {
        let mut trie = Trie::new();
        let stats = PathEnumerator::with_config(grid, config).enumerate_into(&mut trie);
        QueryRunner { trie, stats }
    }

    /// Queries found in the grid, in input order and original spelling.
    pub fn matches<'q, I>(&self, queries: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'q str>,
    {
        queries
            .into_iter()
            .filter(|query| {
                let found = self.trie.contains(query);
                debug!(query = *query, found, "query");
                found
            })
            .map(String::from)
            .collect()
    }

    pub fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.find_words_with_prefix(prefix)
    }

    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}
