//! Error types for copytrie

use thiserror::Error;

/// Result type alias for copytrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building keys for the trie.
///
/// Missing keys are never errors: lookups and removals of absent keys
/// simply yield nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key bytes are not well-formed UTF-8
    #[error("invalid key encoding: malformed UTF-8 after {valid_up_to} bytes")]
    InvalidKey { valid_up_to: usize },
}
