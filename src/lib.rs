//! # Word Trie
//!
//! A prefix tree over characters with per-node prefix counts.
//!
//! The trie stores a set of words. Every node remembers how many stored words
//! pass through it, which makes prefix counting a single walk. The trie can be
//! enumerated, queried for suggestions under a prefix, and written to (and read
//! back from) a compact bracketed string.
//!
//! ## Features
//!
//! - **Counted prefixes**: `count_with_prefix` answers without visiting the subtrie
//! - **Suggestions**: lazy, restartable preorder iteration below a prefix
//! - **Prefix Views**: borrowed views of the subtrie under a prefix
//! - **Compact codec**: a preorder string encoding with configurable markers
//! - **serde**: with the `serde` feature a `Trie` (de)serializes as its encoded string
//!
//! ## Example
//!
//! ```rust
//! use word_trie::Trie;
//!
//! let mut trie = Trie::from_words(vec!["cat", "car", "cart", "dog"]);
//!
//! assert_eq!(trie.len(), 4);
//! assert_eq!(trie.count_with_prefix("ca"), 3);
//! assert!(trie.contains("cart"));
//! assert!(!trie.contains("ca"));
//!
//! trie.remove("car");
//! assert_eq!(trie.count_with_prefix("ca"), 2);
//!
//! let encoded = trie.serialize().unwrap();
//! let decoded = Trie::deserialize(&encoded).unwrap();
//! assert_eq!(trie, decoded);
//! ```

pub mod codec;
pub mod node;
mod prefix_view;
#[cfg(feature = "serde")]
mod serde_impl;
mod trie;

// Re-export public types
pub use crate::codec::CodecConfig;
pub use crate::node::TrieNode;
pub use crate::prefix_view::{PrefixView, Words};
pub use crate::trie::{compare, Trie};

/// `tracing` target used by every event this crate emits.
pub const LOG_TARGET: &str = "word_trie";

/// Result type alias for trie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trie operations.
///
/// Insertion, search, deletion and counting never fail; errors come from
/// suggestions under a missing prefix and from the codec.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No stored word starts with the requested prefix
    #[error("no word with prefix {0:?} exists")]
    PrefixNotFound(String),

    /// The encoded input ended before a node was terminated
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEnd { offset: usize },

    /// An end-of-word marker appeared where an edge character was expected
    #[error("misplaced end-of-word marker at byte {offset}")]
    MisplacedEndMarker { offset: usize },

    /// A node listed the same edge character twice
    #[error("duplicate edge {ch:?} at byte {offset}")]
    DuplicateEdge { ch: char, offset: usize },

    /// Characters follow the root node's terminator
    #[error("trailing input at byte {offset}")]
    TrailingInput { offset: usize },

    /// A stored word contains one of the codec's marker characters
    #[error("word contains reserved codec character {0:?}")]
    ReservedCharacter(char),

    /// The codec configuration cannot be used
    #[error("invalid codec configuration: {0}")]
    InvalidConfig(String),
}
