//! # copytrie
//!
//! A character-keyed trie offered two ways, built on the same nodes.
//!
//! - [`Trie`] is persistent: `put` and `remove` return a new version and leave
//!   every earlier version readable. Only the nodes on the written path are
//!   copied; everything else is shared via `Arc`.
//! - [`TrieStore`] is a single mutable tree behind a reader/writer lock, for
//!   many threads at once. Lookups return a [`ValueGuard`] holding the value
//!   as it was when read.
//!
//! Keys are walked one `char` at a time, so a multi-byte character is never
//! split across nodes. Byte keys are validated once through [`Key::from_utf8`].
//!
//! ## Example
//!
//! ```rust
//! use copytrie::{Trie, TrieStore};
//!
//! let t1 = Trie::new().put("cat", "meow");
//! let t2 = t1.put("car", "vroom");
//! assert_eq!(t1.get("car"), None);
//! assert_eq!(t2.get("cat"), Some(&"meow"));
//!
//! let store = TrieStore::new();
//! store.put("cat", "meow");
//! let guard = store.get("cat").unwrap();
//! store.remove("cat");
//! assert_eq!(guard.value(), Some(&"meow"));
//! ```

mod error;
mod iter;
mod key;
mod node;
mod path;
#[cfg(feature = "serde")]
mod serde_impl;
mod store;
mod trie;

// Re-export public types
pub use crate::error::{Error, Result};
pub use crate::iter::Iter;
pub use crate::key::Key;
pub use crate::node::Node;
pub use crate::store::{TrieStore, ValueGuard};
pub use crate::trie::Trie;
