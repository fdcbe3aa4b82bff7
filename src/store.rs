//! A trie store shared between threads.
//!
//! `TrieStore` keeps one mutable tree behind a single reader/writer lock.
//! Writers hold the lock exclusively for a whole walk, so readers never see a
//! half-updated path. Reads hand back a [`ValueGuard`], a copy of the value
//! slot taken while the lock was held.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::key::Key;
use crate::node::Node;
use crate::path;
use crate::trie::Trie;

/// The result of a store lookup, detached from the live tree.
///
/// Writers replace value slots instead of mutating values, so a guard keeps
/// returning the value it saw even after the key is overwritten or removed.
pub struct ValueGuard<V> {
    value: Option<Arc<V>>,
}

impl<V> Clone for ValueGuard<V> {
    fn clone(&self) -> Self {
        ValueGuard {
            value: self.value.clone(),
        }
    }
}

impl<V> ValueGuard<V> {
    fn new(value: Option<Arc<V>>) -> Self {
        ValueGuard { value }
    }

    /// Returns the value that was stored when the lookup ran, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_deref()
    }

    /// Returns `true` if the looked-up node held no value.
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Consumes the guard, returning the shared value.
    pub fn into_value(self) -> Option<Arc<V>> {
        self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for ValueGuard<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueGuard")
            .field("value", &self.value())
            .finish()
    }
}

struct Tree<V> {
    root: Node<V>,
    len: usize,
}

/// A concurrent trie store with snapshot-safe reads.
///
/// Any number of `get` calls proceed together; `put` and `remove` each take
/// the lock exclusively, making every write a single atomic step.
///
/// # Examples
///
/// ```
/// use copytrie::TrieStore;
///
/// let store = TrieStore::new();
/// store.put("233", 2333);
///
/// let guard = store.get("233").unwrap();
/// store.remove("233");
///
/// assert!(store.get("233").is_none());
/// assert_eq!(guard.value(), Some(&2333));
/// ```
pub struct TrieStore<V> {
    tree: RwLock<Tree<V>>,
}

impl<V> TrieStore<V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        TrieStore {
            tree: RwLock::new(Tree {
                root: Node::new(),
                len: 0,
            }),
        }
    }

    /// Returns the number of values in the store.
    pub fn len(&self) -> usize {
        self.tree.read().len
    }

    /// Returns `true` if the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The empty key is ignored.
    pub fn put<'k>(&self, key: impl Into<Key<'k>>, value: V) {
        let key = key.into();
        if key.is_empty() {
            trace!("ignoring put with empty key");
            return;
        }

        let value = Arc::new(value);
        let mut tree = self.tree.write();
        if path::insert(&mut tree.root, key, value).is_none() {
            tree.len += 1;
        }
        trace!(key = key.as_str(), len = tree.len, "put");
    }

    /// Looks up `key`.
    ///
    /// Returns `None` when no node exists for `key`. A node that only leads to
    /// longer keys yields a guard with no value, and so does the empty key.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<ValueGuard<V>> {
        let key = key.into();
        if key.is_empty() {
            return Some(ValueGuard::new(None));
        }

        let tree = self.tree.read();
        path::find(&tree.root, key).map(|node| ValueGuard::new(node.value.clone()))
    }

    /// Returns `true` if the store holds a value for `key`.
    pub fn contains_key<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.get(key).map_or(false, |guard| !guard.is_absent())
    }

    /// Removes the value stored under `key` and prunes emptied nodes.
    ///
    /// The empty key and missing keys are ignored.
    pub fn remove<'k>(&self, key: impl Into<Key<'k>>) {
        let key = key.into();
        if key.is_empty() {
            trace!("ignoring remove with empty key");
            return;
        }

        let mut tree = self.tree.write();
        if path::remove(&mut tree.root, key).is_some() {
            tree.len -= 1;
            trace!(key = key.as_str(), len = tree.len, "remove");
        }
    }

    /// Captures the current contents as a persistent [`Trie`].
    ///
    /// The snapshot shares every node with the store. Later writes copy the
    /// shared nodes they touch, so the snapshot never changes.
    ///
    /// ```
    /// use copytrie::TrieStore;
    ///
    /// let store = TrieStore::new();
    /// store.put("a", 1);
    /// let snapshot = store.snapshot();
    /// store.put("a", 2);
    ///
    /// assert_eq!(snapshot.get("a"), Some(&1));
    /// assert_eq!(store.get("a").unwrap().value(), Some(&2));
    /// ```
    pub fn snapshot(&self) -> Trie<V> {
        let tree = self.tree.read();
        debug!(len = tree.len, "snapshot");
        Trie::from_root(tree.root.clone(), tree.len)
    }
}

impl<V> Default for TrieStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieStore")
            .field("entries", &self.snapshot())
            .finish()
    }
}
