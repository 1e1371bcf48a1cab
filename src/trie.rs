//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the word trie: insertion, lookup, deletion, prefix counting and listing.

use std::iter::FromIterator;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::codec::{self, CodecConfig};
use crate::node::TrieNode;
use crate::prefix_view::{PrefixView, Words};
use crate::{Error, Result, LOG_TARGET};

/// A set of words stored as a prefix tree.
///
/// Every node keeps the number of stored words that pass through it, so
/// [`count_with_prefix`](Trie::count_with_prefix) is a walk of the prefix
/// length. Children are ordered by character, which makes listing and
/// serialization deterministic.
///
/// Mutation takes `&mut self`; cloning deep-copies the tree.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    /// The root node of the trie, which stands for the empty prefix
    pub(crate) root: TrieNode,

    /// The number of words stored in the trie
    total_words: usize,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            total_words: 0,
        }
    }

    /// Creates a trie holding `words`, inserted in order.
    ///
    /// Duplicates are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::from_words(vec!["hello", "help", "hello"]);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }

    /// Decodes a trie from its bracketed string form using the default markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::deserialize("a]>b]>>").unwrap();
    /// assert_eq!(trie.words(), vec!["a", "b"]);
    /// ```
    pub fn deserialize(serialized: &str) -> Result<Self> {
        Self::deserialize_with(serialized, &CodecConfig::default())
    }

    /// Decodes a trie from its bracketed string form using `config`'s markers.
    pub fn deserialize_with(serialized: &str, config: &CodecConfig) -> Result<Self> {
        let root = codec::decode(serialized, config)?;
        let total_words = root.words_with_prefix;
        Ok(Trie { root, total_words })
    }

    /// Encodes the trie into its bracketed string form using the default markers.
    ///
    /// Fails if a stored word contains one of the marker characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// assert_eq!(Trie::new().serialize().unwrap(), ">");
    /// assert_eq!(Trie::from_words(vec!["ab"]).serialize().unwrap(), "ab]>>>");
    /// ```
    pub fn serialize(&self) -> Result<String> {
        self.serialize_with(&CodecConfig::default())
    }

    /// Encodes the trie into its bracketed string form using `config`'s markers.
    pub fn serialize_with(&self, config: &CodecConfig) -> Result<String> {
        codec::encode(&self.root, config)
    }

    /// Replaces the contents of this trie with a decoded one.
    ///
    /// The input is decoded into a fresh trie first; on error `self` is left
    /// untouched.
    pub fn reload(&mut self, serialized: &str) -> Result<()> {
        let fresh = Self::deserialize(serialized)?;
        debug!(target: LOG_TARGET, words = fresh.total_words, "Reloaded trie from serialized form");
        *self = fresh;
        Ok(())
    }

    /// Inserts every word of a serialized trie into this one.
    ///
    /// Returns the number of words that were not already present. On a
    /// decoding error nothing is inserted.
    pub fn merge_serialized(&mut self, serialized: &str) -> Result<usize> {
        let other = Self::deserialize(serialized)?;
        let added = other.iter().filter(|word| self.insert(word)).count();
        debug!(target: LOG_TARGET, added, "Merged serialized trie");
        Ok(added)
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.total_words
    }

    /// Returns `true` if the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns `true` if `word` is stored in the trie.
    ///
    /// A proper prefix of a stored word is not itself a member. The empty
    /// string is a member only if it was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::from_words(vec!["cat"]);
    /// assert!(trie.contains("cat"));
    /// assert!(!trie.contains("ca"));
    /// assert!(!trie.contains(""));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.root.descend(word).map_or(false, |node| node.is_end)
    }

    /// Inserts `word`, returning `true` if it was not already present.
    ///
    /// Inserting a stored word is a no-op, so prefix counts are never
    /// counted twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("hello"));
    /// assert!(!trie.insert("hello"));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        let mut current = &mut self.root;
        current.words_with_prefix += 1;

        for ch in word.chars() {
            current = current.children.entry(ch).or_insert_with(TrieNode::new);
            current.words_with_prefix += 1;
        }

        current.is_end = true;
        self.total_words += 1;

        trace!(target: LOG_TARGET, word, total = self.total_words, "Inserted word");
        true
    }

    /// Removes `word`, returning `true` if it was present.
    ///
    /// Nodes that no longer lie on the path of any stored word are pruned.
    /// The root is never pruned; removing the empty word only clears its flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie = Trie::from_words(vec!["car", "cart"]);
    /// assert!(trie.remove("car"));
    /// assert!(!trie.remove("car"));
    /// assert!(trie.contains("cart"));
    /// ```
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.contains(word) {
            return false;
        }

        let prune_at = self.prune_depth(word);

        let mut current = &mut self.root;
        current.words_with_prefix -= 1;

        for (depth, ch) in word.chars().enumerate() {
            if prune_at == Some(depth) {
                // Everything below this edge belonged to `word` alone
                current.children.remove(&ch);
                trace!(target: LOG_TARGET, word, depth, "Pruned subtrie");
                self.total_words -= 1;
                return true;
            }

            current = match current.children.get_mut(&ch) {
                Some(child) => child,
                // Membership was checked above, so the path exists
                None => return false,
            };
            current.words_with_prefix -= 1;
        }

        current.is_end = false;
        self.total_words -= 1;

        trace!(target: LOG_TARGET, word, total = self.total_words, "Removed word");
        true
    }

    // Finds the depth of the first edge on `word`'s path whose child would be
    // left with no words, i.e. the shallowest node to detach.
    fn prune_depth(&self, word: &str) -> Option<usize> {
        let mut current = &self.root;
        for (depth, ch) in word.chars().enumerate() {
            current = current.children.get(&ch)?;
            if current.words_with_prefix == 1 {
                return Some(depth);
            }
        }
        None
    }

    /// Returns the number of stored words that start with `prefix`.
    ///
    /// The empty prefix counts every word.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::from_words(vec!["cat", "car", "dog"]);
    /// assert_eq!(trie.count_with_prefix("ca"), 2);
    /// assert_eq!(trie.count_with_prefix(""), 3);
    /// assert_eq!(trie.count_with_prefix("x"), 0);
    /// ```
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.root.descend(prefix).map_or(0, |node| node.words_with_prefix)
    }

    /// Creates a view of the subtrie at the given prefix.
    ///
    /// The view exists even when no stored word has the prefix; check
    /// [`PrefixView::exists`].
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::from_words(vec!["hello", "help", "world"]);
    /// let view = trie.view_subtrie("hel");
    ///
    /// assert!(view.exists());
    /// assert_eq!(view.len(), 2);
    /// assert!(view.contains("hello"));
    /// assert!(!view.contains("world"));
    /// ```
    pub fn view_subtrie<'a>(&'a self, prefix: &str) -> PrefixView<'a> {
        PrefixView::new(self, prefix)
    }

    /// Lazily yields every stored word starting with `prefix`.
    ///
    /// Words come out in preorder: a word before its extensions, siblings in
    /// character order. A prefix that is not on any stored path is reported as
    /// [`Error::PrefixNotFound`] rather than as an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::{Error, Trie};
    ///
    /// let trie = Trie::from_words(vec!["cat", "car", "cart", "dog"]);
    ///
    /// let words: Vec<String> = trie.suggest("ca").unwrap().collect();
    /// assert_eq!(words, vec!["car", "cart", "cat"]);
    ///
    /// assert_eq!(trie.suggest("x").unwrap_err(), Error::PrefixNotFound("x".to_string()));
    /// ```
    pub fn suggest(&self, prefix: &str) -> Result<Words<'_>> {
        let view = self.view_subtrie(prefix);
        if !view.exists() {
            return Err(Error::PrefixNotFound(prefix.to_string()));
        }
        Ok(view.iter())
    }

    /// Iterates over every stored word in preorder.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// Lists every stored word.
    ///
    /// Because children are visited in character order the list is sorted.
    pub fn words(&self) -> Vec<String> {
        self.iter().collect()
    }
}

/// Returns `true` if two tries hold exactly the same words.
///
/// The check is semantic: word counts first, then the sorted word lists.
///
/// # Examples
///
/// ```
/// use word_trie::{compare, Trie};
///
/// let a = Trie::from_words(vec!["b", "a"]);
/// let b = Trie::from_words(vec!["a", "b"]);
/// assert!(compare(&a, &b));
/// ```
pub fn compare(t1: &Trie, t2: &Trie) -> bool {
    if t1.len() != t2.len() {
        return false;
    }

    let mut v1 = t1.words();
    let mut v2 = t2.words();
    v1.sort_unstable();
    v2.sort_unstable();

    v1 == v2
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other)
    }
}

impl Eq for Trie {}

impl FromStr for Trie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Trie::deserialize(s)
    }
}

impl<W: AsRef<str>> Extend<W> for Trie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for Trie {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        Trie::from_words(words)
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
