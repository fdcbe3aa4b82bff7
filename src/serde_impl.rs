//! `serde` support for the persistent trie, enabled by the `serde` feature.
//!
//! A trie serializes as a map from string keys to values, in key order.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::key::Key;
use crate::node::Node;
use crate::path;
use crate::trie::Trie;

impl<V: Serialize> Serialize for Trie<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

struct TrieVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for TrieVisitor<V> {
    type Value = Trie<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of non-empty string keys to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut root = Node::new();
        let mut size = 0;
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            if key.is_empty() {
                return Err(serde::de::Error::custom("trie keys must not be empty"));
            }
            if path::insert(&mut root, Key::from(&key), Arc::new(value)).is_none() {
                size += 1;
            }
        }
        Ok(Trie::from_root(root, size))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Trie<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TrieVisitor(PhantomData))
    }
}
