//! The persistent trie.
//!
//! This module contains the `Trie` type: an immutable handle whose every
//! write returns a new version while all earlier versions stay readable.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::iter::Iter;
use crate::key::Key;
use crate::node::Node;
use crate::path;

/// An immutable trie with structural sharing.
///
/// Keys are walked one `char` at a time. `put` and `remove` never touch the
/// receiver: they copy the nodes on the written path and share every other
/// subtree, via `Arc`, with the version they started from.
///
/// # Examples
///
/// ```
/// use copytrie::Trie;
///
/// let t0 = Trie::new();
/// let t1 = t0.put("test", "hello");
/// let t2 = t1.put("testing", "works");
/// let t3 = t2.remove("test");
///
/// assert_eq!(t1.get("test"), Some(&"hello"));
/// assert_eq!(t3.get("test"), None);
/// assert_eq!(t3.get("testing"), Some(&"works"));
/// assert!(t0.is_empty());
/// ```
pub struct Trie<V> {
    /// The root node of the trie
    pub(crate) root: Arc<Node<V>>,

    /// The number of values stored in the trie
    size: usize,
}

impl<V> Clone for Trie<V> {
    fn clone(&self) -> Self {
        Trie {
            root: Arc::clone(&self.root),
            size: self.size,
        }
    }
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// ```
    /// use copytrie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: Arc::new(Node::new()),
            size: 0,
        }
    }

    pub(crate) fn from_root(root: Node<V>, size: usize) -> Self {
        Trie {
            root: Arc::new(root),
            size,
        }
    }

    /// Returns the number of values stored in the trie.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Returns `true` if both handles point at the same root node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Returns a new trie with `value` stored under `key`.
    ///
    /// An existing value for `key` is replaced. The empty key is ignored and
    /// the receiver is returned unchanged.
    ///
    /// ```
    /// use copytrie::Trie;
    ///
    /// let trie1 = Trie::new();
    /// let trie2 = trie1.put("hello", 42);
    ///
    /// assert!(trie1.is_empty());
    /// assert_eq!(trie2.get("hello"), Some(&42));
    /// ```
    pub fn put<'k>(&self, key: impl Into<Key<'k>>, value: V) -> Self {
        let key = key.into();
        if key.is_empty() {
            trace!("ignoring put with empty key");
            return self.clone();
        }

        let mut root = Node::clone(&self.root);
        let replaced = path::insert(&mut root, key, Arc::new(value));
        let size = if replaced.is_some() {
            self.size
        } else {
            self.size + 1
        };
        Trie::from_root(root, size)
    }

    /// Retrieves a reference to the value stored for `key`, if any.
    ///
    /// The empty key and keys that only name a prefix of stored keys both
    /// yield `None`.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&V> {
        let key = key.into();
        if key.is_empty() {
            return None;
        }
        path::find(&self.root, key).and_then(Node::value)
    }

    /// Returns `true` if the trie contains a value for `key`.
    pub fn contains_key<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.get(key).is_some()
    }

    /// Returns the node reached by walking `key`, whether or not it holds a value.
    ///
    /// The empty key yields the root.
    pub fn node<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Node<V>> {
        path::find(&self.root, key.into())
    }

    /// Returns a new trie without `key`.
    ///
    /// Nodes left with neither a value nor children are pruned, deepest
    /// first. A node that still leads to longer keys only loses its value.
    /// If `key` holds no value the result shares the receiver's root.
    ///
    /// ```
    /// use copytrie::Trie;
    ///
    /// let trie1 = Trie::new().put("cat", 1).put("catacomb", 2);
    /// let trie2 = trie1.remove("cat");
    ///
    /// assert_eq!(trie2.get("cat"), None);
    /// assert!(trie2.node("cat").is_some());
    /// assert_eq!(trie1.get("cat"), Some(&1));
    /// ```
    pub fn remove<'k>(&self, key: impl Into<Key<'k>>) -> Self {
        let key = key.into();
        if !self.contains_key(key) {
            return self.clone();
        }

        let mut root = Node::clone(&self.root);
        let removed = path::remove(&mut root, key);
        let size = self.size - usize::from(removed.is_some());
        Trie::from_root(root, size)
    }

    /// Returns an iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root, String::new())
    }

    /// Returns an iterator over the entries whose keys start with `prefix`.
    ///
    /// ```
    /// use copytrie::Trie;
    ///
    /// let trie = Trie::new().put("hello", 1).put("help", 2).put("world", 3);
    /// let keys: Vec<String> = trie.iter_prefix("hel").map(|(k, _)| k).collect();
    ///
    /// assert_eq!(keys, vec!["hello", "help"]);
    /// ```
    pub fn iter_prefix<'k>(&self, prefix: impl Into<Key<'k>>) -> Iter<'_, V> {
        let prefix = prefix.into();
        match path::find(&self.root, prefix) {
            Some(node) => Iter::new(node, prefix.as_str().to_owned()),
            None => Iter::empty(),
        }
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if they're the same instance
        if self.ptr_eq(other) {
            return true;
        }

        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut root = Node::new();
        let mut size = 0;
        for (key, value) in iter {
            let key = Key::new(key.as_ref());
            if key.is_empty() {
                continue;
            }
            if path::insert(&mut root, key, Arc::new(value)).is_none() {
                size += 1;
            }
        }
        Trie::from_root(root, size)
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
