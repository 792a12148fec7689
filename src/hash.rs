use ahash::AHashMap;

/// Map from each key of a keyed collection to the position of its value.
pub(crate) type KeyIndex<K> = AHashMap<K, usize>;
