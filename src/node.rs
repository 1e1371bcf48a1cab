//! Node type for the word trie.
//!
//! A `TrieNode` owns its children outright. There is no sharing between
//! nodes or between tries, so dropping a node drops the whole subtree below
//! it and cloning a node deep-copies it.
//!
//! A word of length `n` makes a chain `n` nodes deep, so the whole-subtree
//! walks below use an explicit stack rather than the call stack.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::mem;

/// One node of the trie.
///
/// Each node is reached from its parent by a single character edge. The path
/// of edges from the root spells the prefix the node stands for.
#[derive(Default)]
pub struct TrieNode {
    /// Whether a stored word ends exactly at this node
    pub(crate) is_end: bool,

    /// Number of stored words whose path passes through this node,
    /// including a word that ends here
    pub(crate) words_with_prefix: usize,

    /// Child nodes keyed by the edge character, kept in character order
    pub(crate) children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates an empty node: not a word end, no words below, no children.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Returns `true` if a stored word ends at this node.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Returns the number of stored words that pass through this node.
    pub fn words_with_prefix(&self) -> usize {
        self.words_with_prefix
    }

    /// Returns the child reached by `ch`, if the edge exists.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterates over `(edge, child)` pairs in character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(ch, child)| (*ch, child))
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node that is not a word end and has no words below it.
    ///
    /// Such nodes carry no information and are pruned by the trie.
    pub fn is_vacant(&self) -> bool {
        !self.is_end && self.words_with_prefix == 0 && self.children.is_empty()
    }

    /// Follows `path` one character at a time from this node.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut current = self;
        for ch in path.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    /// Counts the word ends in this subtree by walking it.
    ///
    /// This is the slow equivalent of `words_with_prefix` and exists to audit
    /// the cached counts.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_end {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Checks the prefix-count and pruning invariants for this subtree.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            let own = if node.is_end { 1 } else { 0 };
            let below: usize = node.children.values().map(|c| c.words_with_prefix).sum();
            if node.words_with_prefix != own + below {
                return false;
            }
            if node.children.values().any(|c| c.words_with_prefix == 0) {
                return false;
            }
            stack.extend(node.children.values());
        }

        true
    }

    // Copies the flags of this node without its children
    fn shallow_copy(&self) -> Self {
        TrieNode {
            is_end: self.is_end,
            words_with_prefix: self.words_with_prefix,
            children: BTreeMap::new(),
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants so each one drops with an empty child map
        let mut stack: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut root = self.shallow_copy();
        let mut root_children = self.children.iter();
        // Copies under construction, each with its edge and the source
        // children still to copy
        let mut stack: Vec<(char, btree_map::Iter<'_, char, TrieNode>, TrieNode)> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some((_, pending, _)) => pending.next(),
                None => root_children.next(),
            };

            match next {
                Some((ch, child)) => {
                    stack.push((*ch, child.children.iter(), child.shallow_copy()));
                }
                None => {
                    let (edge, _, copy) = match stack.pop() {
                        Some(done) => done,
                        None => break,
                    };
                    let parent = match stack.last_mut() {
                        Some((_, _, parent)) => parent,
                        None => &mut root,
                    };
                    parent.children.insert(edge, copy);
                }
            }
        }

        root
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.is_end != b.is_end
                || a.words_with_prefix != b.words_with_prefix
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(b.children.iter()) {
                if ca != cb {
                    return false;
                }
                stack.push((na, nb));
            }
        }

        true
    }
}

impl Eq for TrieNode {}

// Shows one level only; printing the whole subtree would recurse per character
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end", &self.is_end)
            .field("words_with_prefix", &self.words_with_prefix)
            .field("edges", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
