pub mod trie;
pub mod iterators;

mod node;
mod search;
mod serialize;

pub use self::iterators::Words;
pub use self::trie::Trie;
