//! Root-to-terminal walks used by both the persistent trie and the store.
//!
//! Writers descend through `Arc::make_mut`. A uniquely owned child is
//! mutated in place; a child shared with another version is cloned first, so
//! only the nodes on the written path are ever copied.

use std::sync::Arc;

use crate::key::Key;
use crate::node::Node;

/// Finds the node at the end of `key`, starting from `root`.
///
/// The empty key resolves to `root` itself.
pub(crate) fn find<'a, V>(root: &'a Node<V>, key: Key<'_>) -> Option<&'a Node<V>> {
    key.units().try_fold(root, |node, unit| node.child(unit))
}

/// Stores `value` at the end of `key`, creating missing nodes on the way.
///
/// Returns the value previously stored there.
pub(crate) fn insert<V>(root: &mut Node<V>, key: Key<'_>, value: Arc<V>) -> Option<Arc<V>> {
    let mut node = root;
    for unit in key.units() {
        let child = node
            .children
            .entry(unit)
            .or_insert_with(|| Arc::new(Node::new()));
        node = Arc::make_mut(child);
    }
    node.value.replace(value)
}

/// Clears the value at the end of `key`, pruning the nodes it leaves empty.
///
/// Returns the removed value. A missing path or value leaves the tree
/// untouched, without copying anything shared.
///
/// A first read-only pass finds the shallowest node of the trailing chain
/// that becomes empty once the value goes: every node below the last
/// ancestor that keeps a value or another child. Detaching that one edge
/// drops the whole chain, which is the same outcome as pruning deepest first.
/// Only the nodes above the cut are written, so neither pass recurses.
pub(crate) fn remove<V>(root: &mut Node<V>, key: Key<'_>) -> Option<Arc<V>> {
    let mut anchor = 0;
    let mut depth = 0;
    let mut node: &Node<V> = root;
    for unit in key.units() {
        if node.value.is_some() || node.children.len() > 1 {
            anchor = depth;
        }
        node = node.child(unit)?;
        depth += 1;
    }
    if depth == 0 {
        return None;
    }
    let removed = node.value.clone()?;
    let prune = node.is_leaf();

    let mut units = key.units();
    let mut node = root;
    let steps = if prune { anchor } else { depth };
    for unit in units.by_ref().take(steps) {
        node = Arc::make_mut(node.children.get_mut(&unit)?);
    }

    if prune {
        let unit = units.next()?;
        node.children.remove(&unit);
    } else {
        node.value = None;
    }
    Some(removed)
}
