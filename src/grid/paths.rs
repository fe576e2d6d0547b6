use std::time::Instant;

use derive_new::new;
use tracing::{debug, info};

use crate::grid::config::EnumerationConfig;
use crate::grid::{Grid, Position};
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// Counters from one enumeration run.
#[derive(new, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Simple paths walked.
    pub paths: usize,
    /// Path strings that were not already in the index.
    pub new_words: usize,
}

/// Feeds the string of every simple 8-connected path in a grid into an
/// [`Index`].
///
/// The number of simple paths grows exponentially with grid size. Keep grids
/// small or bound the walk with [`EnumerationConfig::max_path_len`].
pub struct PathEnumerator<'g> {
    grid: &'g Grid,
    config: EnumerationConfig,
}

impl<'g> PathEnumerator<'g> {
    pub fn new(grid: &'g Grid) -> PathEnumerator<'g> {
        PathEnumerator::with_config(grid, EnumerationConfig::default())
    }

    pub fn with_config(grid: &'g Grid, config: EnumerationConfig) -> PathEnumerator<'g> {
        PathEnumerator { grid, config }
    }

    pub fn enumerate_into<I: Index>(&self, index: &mut I) -> EnumerationStats {
        let start = Instant::now();
        let mut walk = Walk {
            grid: self.grid,
            config: &self.config,
            index,
            visited: vec![false; self.grid.len()],
            path: String::new(),
            stats: EnumerationStats::default(),
        };

        for pos in self.grid.positions() {
            let before = walk.stats.paths;
            walk.visit(pos, 1, 0);
            debug!("{} paths start at {}", walk.stats.paths - before, pos);
        }

        let stats = walk.stats;
        info!(
            "Walked {} paths over a {}x{} grid, {} new words in {:.3}s",
            stats.paths,
            self.grid.rows(),
            self.grid.cols(),
            stats.new_words,
            start.elapsed().as_secs_f64()
        );
        stats
    }

    /// Enumerates into a fresh trie.
    pub fn build_trie(&self) -> Trie {
        let mut trie = Trie::new();
        self.enumerate_into(&mut trie);
        trie
    }
}

/// State of a single depth-first walk. `visited` and `path` are pushed before
/// descending and popped after, so sibling branches never see each other.
struct Walk<'a, I> {
    grid: &'a Grid,
    config: &'a EnumerationConfig,
    index: &'a mut I,
    visited: Vec<bool>,
    path: String,
    stats: EnumerationStats,
}

impl<'a, I: Index> Walk<'a, I> {
    /// Extends the current path with `pos`, which is its `cells`-th cell.
    /// `chars` is the path's character length before `pos`.
    fn visit(&mut self, pos: Position, cells: usize, chars: usize) {
        if !self.config.allows_len(cells) {
            return;
        }
        let grid = self.grid;
        let token = match grid.get(pos) {
            Some(token) => token,
            None => return,
        };
        let slot = grid.index_of(pos);
        let mark = self.path.len();
        let chars = chars + token.chars().count();

        self.visited[slot] = true;
        self.path.push_str(token);
        self.stats.paths += 1;
        if chars >= self.config.min_word_len && self.index.add(&self.path) {
            self.stats.new_words += 1;
        }

        for next in grid.neighbors(pos) {
            if !self.visited[grid.index_of(next)] {
                self.visit(next, cells + 1, chars);
            }
        }

        self.path.truncate(mark);
        self.visited[slot] = false;
    }
}
