//! Prefix view into a word trie.
//!
//! This module provides the `PrefixView` type, which gives access to the
//! subtrie below a prefix, and the `Words` iterator used for suggestions and
//! full listings.

use std::fmt;

use crate::node::TrieNode;
use crate::Trie;

/// A borrowed view into the subtrie defined by a prefix.
///
/// The view is resolved once on creation. It can report whether the prefix
/// is on any stored path, how many words carry it, and iterate them.
///
/// # Examples
///
/// ```
/// use word_trie::Trie;
///
/// let trie1 = Trie::from_words(vec!["hello", "help"]);
/// let trie2 = Trie::from_words(vec!["help", "hello", "world"]);
///
/// let view1 = trie1.view_subtrie("hel");
/// let view2 = trie2.view_subtrie("hel");
///
/// // Views with identical content are equal
/// assert_eq!(view1, view2);
///
/// // Check if words exist in the view
/// assert!(view1.contains("hello"));
/// assert!(!view1.contains("world"));
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The source trie for this view
    trie: &'a Trie,

    /// The prefix defining this view
    prefix: String,

    /// The subtrie node at the prefix, if it exists
    subtrie_node: Option<&'a TrieNode>,
}

impl<'a> PrefixView<'a> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie, prefix: &str) -> Self {
        PrefixView {
            trie,
            prefix: prefix.to_string(),
            subtrie_node: trie.root.descend(prefix),
        }
    }

    /// Returns the prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// Returns whether the prefix lies on the path of a stored word.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of stored words that start with the prefix.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, |node| node.words_with_prefix)
    }

    /// Returns whether this view is empty (contains no words).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a word.
    ///
    /// Only returns true if the word is in the trie and starts with the prefix.
    pub fn contains(&self, word: &str) -> bool {
        let node = match self.subtrie_node {
            Some(node) => node,
            None => return false,
        };

        match word.strip_prefix(self.prefix.as_str()) {
            Some(rest) => node.descend(rest).map_or(false, |n| n.is_end),
            None => false,
        }
    }

    /// Returns an iterator over the words in the view, prefix included.
    ///
    /// The iterator yields words in depth-first preorder.
    pub fn iter(&self) -> Words<'a> {
        match self.subtrie_node {
            Some(node) => Words::new(node, self.prefix.clone()),
            None => Words::empty(),
        }
    }
}

impl fmt::Debug for PrefixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("len", &self.len())
            .finish()
    }
}

impl PartialEq for PrefixView<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                // Fast path: same node instance
                if std::ptr::eq(a, b) {
                    return true;
                }
                // Shape is a function of the word set, so equal subtries hold
                // equal suffixes
                a == b
            }
            _ => false,
        }
    }
}

impl Eq for PrefixView<'_> {}

impl<'a> IntoIterator for &PrefixView<'a> {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy iterator over stored words.
///
/// Performs a preorder depth-first traversal with an explicit stack: a word is
/// yielded before any of its extensions and siblings come in character order.
/// The iterator only borrows the trie, so asking the trie again starts over.
pub struct Words<'a> {
    /// Nodes still to visit, each with the length of its parent's word and
    /// the edge leading to it
    stack: Vec<(usize, Option<char>, &'a TrieNode)>,

    /// The word spelled on the way to the node being visited
    word: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(start: &'a TrieNode, prefix: String) -> Self {
        Words {
            stack: vec![(prefix.len(), None, start)],
            word: prefix,
        }
    }

    pub(crate) fn empty() -> Self {
        Words {
            stack: Vec::new(),
            word: String::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((len, edge, node)) = self.stack.pop() {
            self.word.truncate(len);
            if let Some(ch) = edge {
                self.word.push(ch);
            }

            // Push in reverse so the smallest edge is visited first
            let here = self.word.len();
            for (ch, child) in node.children.iter().rev() {
                self.stack.push((here, Some(*ch), child));
            }

            if node.is_end {
                return Some(self.word.clone());
            }
        }

        None
    }
}

impl fmt::Debug for Words<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("pending", &self.stack.len())
            .finish()
    }
}
