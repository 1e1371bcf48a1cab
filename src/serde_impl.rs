//! `serde` support: a `Trie` travels as its bracketed string.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, CodecConfig};
use crate::Trie;

impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded =
            codec::encode(&self.root, &CodecConfig::default()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

struct TrieVisitor;

impl<'de> Visitor<'de> for TrieVisitor {
    type Value = Trie;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a bracketed trie string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Trie, E> {
        Trie::deserialize_with(v, &CodecConfig::default()).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TrieVisitor)
    }
}
