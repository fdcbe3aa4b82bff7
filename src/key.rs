//! Validated trie keys.
//!
//! Every key is walked one Unicode scalar value (`char`) at a time. A `&str`
//! is always well-formed UTF-8, so it converts into a [`Key`] infallibly. Raw
//! bytes are checked once, here, before any trie or store operation sees them.
use std::fmt;
use std::str::Chars;

use crate::error::{Error, Result};

/// A borrowed key whose units are the `char`s of a string.
///
/// # Examples
///
/// ```
/// use copytrie::Key;
///
/// let key = Key::from("cat");
/// assert_eq!(key.units().collect::<Vec<_>>(), vec!['c', 'a', 't']);
///
/// assert!(Key::from_utf8(&[0x63, 0xff]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key<'a>(&'a str);

impl<'a> Key<'a> {
    /// Creates a key from a string slice.
    pub fn new(key: &'a str) -> Self {
        Key(key)
    }

    /// Validates raw bytes as a UTF-8 key.
    ///
    /// Malformed sequences are rejected with [`Error::InvalidKey`], carrying
    /// the length of the valid prefix.
    pub fn from_utf8(bytes: &'a [u8]) -> Result<Self> {
        std::str::from_utf8(bytes)
            .map(Key)
            .map_err(|e| Error::InvalidKey {
                valid_up_to: e.valid_up_to(),
            })
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns `true` for the empty key, which no trie operation accepts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the key units, in order.
    pub fn units(&self) -> Chars<'a> {
        self.0.chars()
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(key: &'a str) -> Self {
        Key(key)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(key: &'a String) -> Self {
        Key(key.as_str())
    }
}

impl<'a> TryFrom<&'a [u8]> for Key<'a> {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self> {
        Key::from_utf8(bytes)
    }
}

impl AsRef<str> for Key<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
