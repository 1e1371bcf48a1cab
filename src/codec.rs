//! Bracketed string codec for tries.
//!
//! A node is written as an optional end-of-word marker, then each child as
//! its edge character followed by the child's own encoding, then a
//! terminator:
//!
//! ```text
//! node := [END] (char node)* TERM
//! ```
//!
//! With the default markers (`]` and `>`) the empty trie is `">"` and the
//! trie holding `"a"` and `"ab"` is `"a]b]>>>"`.

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::{debug, trace};

use crate::node::TrieNode;
use crate::{Error, Result, LOG_TARGET};

/// Default end-of-word marker.
pub const END_MARKER: char = ']';

/// Default node terminator.
pub const TERMINATOR: char = '>';

/// Marker characters used by the codec.
///
/// Words containing either marker cannot be encoded, so pick markers outside
/// the alphabet of the stored words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Written first in the encoding of a node where a word ends
    pub end_marker: char,

    /// Closes the encoding of every node
    pub terminator: char,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            end_marker: END_MARKER,
            terminator: TERMINATOR,
        }
    }
}

impl CodecConfig {
    /// Creates a configuration with the given markers.
    pub fn new(end_marker: char, terminator: char) -> Self {
        CodecConfig {
            end_marker,
            terminator,
        }
    }

    /// Checks that the markers can be told apart.
    pub fn validate(&self) -> Result<()> {
        if self.end_marker == self.terminator {
            return Err(Error::InvalidConfig(format!(
                "end marker and terminator are both {:?}",
                self.end_marker
            )));
        }
        Ok(())
    }

    fn is_reserved(&self, ch: char) -> bool {
        ch == self.end_marker || ch == self.terminator
    }
}

/// Encodes the subtrie rooted at `root`.
pub fn encode(root: &TrieNode, config: &CodecConfig) -> Result<String> {
    config.validate()?;

    let mut out = String::new();
    if root.is_end {
        out.push(config.end_marker);
    }

    // Children still to write, one iterator per open node
    let mut stack = vec![root.children.iter()];
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some((ch, child)) => {
                if config.is_reserved(*ch) {
                    return Err(Error::ReservedCharacter(*ch));
                }
                out.push(*ch);
                if child.is_end {
                    out.push(config.end_marker);
                }
                stack.push(child.children.iter());
            }
            None => {
                stack.pop();
                out.push(config.terminator);
            }
        }
    }

    Ok(out)
}

/// Decodes a subtrie, rebuilding every node's prefix count.
///
/// Children that hold no words are dropped. Anything after the root's
/// terminator is an error.
pub fn decode(input: &str, config: &CodecConfig) -> Result<TrieNode> {
    config.validate()?;

    let root = Decoder::new(input, config).decode()?;
    debug!(target: LOG_TARGET, words = root.words_with_prefix, bytes = input.len(), "Decoded trie");
    Ok(root)
}

struct Decoder<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    config: &'a CodecConfig,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a str, config: &'a CodecConfig) -> Self {
        Decoder {
            input,
            chars: input.char_indices().peekable(),
            config,
        }
    }

    // Starts a node, consuming its end marker if present
    fn open(&mut self) -> TrieNode {
        let mut node = TrieNode::new();
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == self.config.end_marker {
                self.chars.next();
                node.is_end = true;
                node.words_with_prefix = 1;
            }
        }
        node
    }

    fn decode(mut self) -> Result<TrieNode> {
        let mut root = self.open();
        // Open nodes below the root, each with the edge leading to it and
        // the offset of that edge
        let mut stack: Vec<(char, usize, TrieNode)> = Vec::new();

        loop {
            let (offset, ch) = match self.chars.next() {
                Some(next) => next,
                None => {
                    return Err(Error::UnexpectedEnd {
                        offset: self.input.len(),
                    })
                }
            };

            if ch == self.config.terminator {
                let (edge, edge_offset, mut node) = match stack.pop() {
                    Some(open) => open,
                    None => break,
                };
                prune_vacant(&mut node);
                let parent = match stack.last_mut() {
                    Some((_, _, parent)) => parent,
                    None => &mut root,
                };
                attach(parent, edge, edge_offset, node)?;
            } else if ch == self.config.end_marker {
                return Err(Error::MisplacedEndMarker { offset });
            } else {
                let child = self.open();
                stack.push((ch, offset, child));
            }
        }

        if let Some((offset, _)) = self.chars.next() {
            return Err(Error::TrailingInput { offset });
        }

        prune_vacant(&mut root);
        Ok(root)
    }
}

fn attach(parent: &mut TrieNode, edge: char, offset: usize, child: TrieNode) -> Result<()> {
    if parent.children.contains_key(&edge) {
        return Err(Error::DuplicateEdge { ch: edge, offset });
    }
    // Vacant children stay until the parent closes so later duplicates of
    // their edge are still caught
    parent.words_with_prefix += child.words_with_prefix;
    parent.children.insert(edge, child);
    Ok(())
}

fn prune_vacant(node: &mut TrieNode) {
    let before = node.children.len();
    node.children.retain(|_, child| !child.is_vacant());

    let dropped = before - node.children.len();
    if dropped > 0 {
        trace!(target: LOG_TARGET, dropped, "Dropping empty subtries");
    }
}
