//! Property tests against a `BTreeMap` reference model.

use std::collections::BTreeMap;

use copytrie::{Node, Trie, TrieStore};
use quickcheck::quickcheck;

/// `true` = put, `false` = remove
type Op = (bool, String, u8);

fn apply_model(model: &mut BTreeMap<String, u8>, (is_put, key, value): &Op) {
    if key.is_empty() {
        return;
    }
    if *is_put {
        model.insert(key.clone(), *value);
    } else {
        model.remove(key);
    }
}

fn apply_trie(trie: &Trie<u8>, (is_put, key, value): &Op) -> Trie<u8> {
    if *is_put {
        trie.put(key, *value)
    } else {
        trie.remove(key)
    }
}

fn matches_model(trie: &Trie<u8>, model: &BTreeMap<String, u8>) -> bool {
    let entries: Vec<(String, u8)> = trie.iter().map(|(k, v)| (k, *v)).collect();
    let expected: Vec<(String, u8)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
    trie.len() == model.len() && entries == expected
}

/// No reachable node may be empty, apart from the root.
fn no_dangling_nodes(node: &Node<u8>) -> bool {
    node.units().into_iter().all(|unit| match node.child(unit) {
        Some(child) => !child.is_prunable() && no_dangling_nodes(child),
        None => false,
    })
}

quickcheck! {
    fn prop_trie_matches_model(ops: Vec<Op>) -> bool {
        let mut model = BTreeMap::new();
        let mut trie = Trie::new();
        for op in &ops {
            apply_model(&mut model, op);
            trie = apply_trie(&trie, op);
        }
        matches_model(&trie, &model) && no_dangling_nodes(trie.root())
    }

    fn prop_every_version_is_preserved(ops: Vec<Op>) -> bool {
        let mut model = BTreeMap::new();
        let mut history = vec![(Trie::new(), model.clone())];
        for op in &ops {
            apply_model(&mut model, op);
            let next = match history.last() {
                Some((trie, _)) => apply_trie(trie, op),
                None => Trie::new(),
            };
            history.push((next, model.clone()));
        }
        history.iter().all(|(trie, model)| matches_model(trie, model))
    }

    fn prop_put_then_get(keys: Vec<String>, key: String, value: u8) -> bool {
        let trie: Trie<u8> = keys.iter().map(|k| (k, 0)).collect();
        let updated = trie.put(&key, value);
        if key.is_empty() {
            return updated.ptr_eq(&trie);
        }
        let bumped = value.wrapping_add(1);
        updated.get(&key) == Some(&value) && updated.put(&key, bumped).get(&key) == Some(&bumped)
    }

    fn prop_store_matches_trie(ops: Vec<Op>) -> bool {
        let store = TrieStore::new();
        let mut trie = Trie::new();
        for (is_put, key, value) in &ops {
            if *is_put {
                store.put(key, *value);
            } else {
                store.remove(key);
            }
            trie = apply_trie(&trie, &(*is_put, key.clone(), *value));
        }
        let snapshot = store.snapshot();
        snapshot == trie && store.len() == trie.len() && no_dangling_nodes(snapshot.root())
    }
}
