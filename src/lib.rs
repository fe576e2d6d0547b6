pub mod alphabet;
pub mod error;
pub mod grid;
pub mod query;
pub mod wordlist;

pub use crate::alphabet::normalize;
pub use crate::error::{Error, GridError};
pub use crate::grid::config::EnumerationConfig;
pub use crate::grid::generator::GridGenerator;
pub use crate::grid::paths::{EnumerationStats, PathEnumerator};
pub use crate::grid::{Grid, Position};
pub use crate::query::QueryRunner;
pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
