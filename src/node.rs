//! Node implementation shared by the persistent trie and the concurrent store.
//!
//! Child nodes are always wrapped in an `Arc`. The persistent trie shares
//! them between versions; the store owns each one uniquely and mutates it in
//! place.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A single trie node: an optional value slot plus children keyed by unit.
///
/// A node with no value and no children is never reachable from a published
/// trie or store; removal prunes it.
pub struct Node<V> {
    /// The value stored for the key ending at this node, if any
    pub(crate) value: Option<Arc<V>>,

    /// Child nodes indexed by the next key unit
    pub(crate) children: HashMap<char, Arc<Node<V>>>,
}

impl<V> Node<V> {
    /// Creates a new empty node
    pub(crate) fn new() -> Self {
        Node {
            value: None,
            children: HashMap::new(),
        }
    }

    /// Returns the value stored at this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_deref()
    }

    /// Returns the child reached by `unit`, if any.
    pub fn child(&self, unit: char) -> Option<&Node<V>> {
        self.children.get(&unit).map(|child| &**child)
    }

    /// Returns the number of direct children.
    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Returns the units of the direct children, sorted.
    pub fn units(&self) -> Vec<char> {
        let mut units: Vec<char> = self.children.keys().copied().collect();
        units.sort_unstable();
        units
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node holds nothing and may be dropped from its parent.
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.value.is_some());
            stack.extend(node.children.values().map(|child| &**child));
        }
        count
    }

    /// Returns the children in ascending unit order.
    pub(crate) fn sorted_children(&self) -> Vec<(char, &Node<V>)> {
        let mut children: Vec<(char, &Node<V>)> = self
            .children
            .iter()
            .map(|(unit, child)| (*unit, &**child))
            .collect();
        children.sort_unstable_by_key(|&(unit, _)| unit);
        children
    }
}

// Shallow: the new node shares every child subtree and the value with `self`.
impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}

// Unlinks uniquely owned descendants onto a stack so that dropping a long
// chain never recurses. Subtrees still shared with another version are only
// released here.
impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut stack: Vec<Arc<Node<V>>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(child) = stack.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                stack.extend(node.children.drain().map(|(_, child)| child));
            }
        }
    }
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<(char, &Node<V>)> = self.sorted_children();
        f.debug_struct("Node")
            .field("value", &self.value())
            .field("children", &children)
            .finish()
    }
}
