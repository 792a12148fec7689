use std::fmt::Debug;

use thiserror as te;

#[derive(Debug, Clone, PartialEq, Eq, te::Error)]
#[error("Not a valid position: {0}")]
pub struct MalformedPosition(pub String);

#[derive(Debug, Clone, PartialEq, Eq, te::Error)]
pub enum InvalidPosition {
    #[error(transparent)]
    Malformed(#[from] MalformedPosition),
    #[error("Position {index} out of range for collection of length {len}")]
    OutOfRange { index: usize, len: usize },
}

// Not `#[from]`: that also marks the key as the error's source,
// so `KeyAbsent<K>` would only be an `Error` for keys which are themselves errors.
#[derive(Debug, te::Error)]
#[error("Key not found: {0:?}")]
pub struct KeyAbsent<K: Debug>(K);

impl<K: Debug> From<K> for KeyAbsent<K> {
    fn from(key: K) -> Self {
        Self(key)
    }
}

impl<K: Debug> KeyAbsent<K> {
    pub fn key(&self) -> &K {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, te::Error)]
#[error("Cannot reduce an empty collection without an initial value")]
pub struct EmptyCollection;
