//! Ordered iteration over a trie.
//!
//! This module provides the `Iter` type, which walks a subtree depth-first
//! and yields every stored entry in ascending key order.

use crate::node::Node;

/// An iterator over the entries of a trie or of one of its prefixes.
///
/// Children are visited in ascending unit order and a node's own entry comes
/// before its descendants, so keys come out sorted.
pub struct Iter<'a, V> {
    /// Nodes still to visit, with the key that leads to each
    stack: Vec<(&'a Node<V>, String)>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(start: &'a Node<V>, key: String) -> Self {
        Iter {
            stack: vec![(start, key)],
        }
    }

    pub(crate) fn empty() -> Self {
        Iter { stack: Vec::new() }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Push in reverse so the smallest unit is popped first
            for (unit, child) in node.sorted_children().into_iter().rev() {
                let mut child_key = String::with_capacity(key.len() + unit.len_utf8());
                child_key.push_str(&key);
                child_key.push(unit);
                self.stack.push((child, child_key));
            }

            if let Some(value) = node.value() {
                return Some((key, value));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;

    #[test]
    fn test_iter_empty_trie() {
        let trie: Trie<u32> = Trie::new();
        assert_eq!(trie.iter().next(), None);
    }

    #[test]
    fn test_iter_yields_sorted_keys() {
        let trie = Trie::new()
            .put("zebra", 5)
            .put("apple", 1)
            .put("banana", 2)
            .put("apricot", 6)
            .put("app", 0);

        let keys: Vec<String> = trie.keys().collect();
        assert_eq!(keys, vec!["app", "apple", "apricot", "banana", "zebra"]);
    }

    #[test]
    fn test_iter_prefix() {
        let trie = Trie::new()
            .put("abcd", 1)
            .put("abce", 2)
            .put("abc", 3)
            .put("abd", 4);

        let entries: Vec<(String, u32)> = trie.iter_prefix("abc").map(|(k, v)| (k, *v)).collect();
        assert_eq!(
            entries,
            vec![
                ("abc".to_string(), 3),
                ("abcd".to_string(), 1),
                ("abce".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_iter_multibyte_keys() {
        let trie = Trie::new().put("日本", 1).put("日", 2).put("é", 3);

        let keys: Vec<String> = trie.keys().collect();
        assert_eq!(keys, vec!["é", "日", "日本"]);
    }

    #[test]
    fn test_iter_skips_prefix_only_nodes() {
        let trie = Trie::new().put("cat", 1).put("catacomb", 2).remove("cat");

        let keys: Vec<String> = trie.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["catacomb"]);
    }
}
