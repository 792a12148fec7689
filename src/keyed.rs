use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::Deref;

use crate::error::KeyAbsent;
use crate::hash::KeyIndex;
use crate::iter::{Entries, IntoIter, Iter};
use crate::{Collection, Key, ToOrdered};

/// An immutable collection of values associated with unique keys.
///
/// Iteration follows key insertion order.
/// The key-free read surface of [Collection] is available through [Deref]:
/// positions seen through it are dense and zero-based, and keys never appear.
///
/// ```
/// use ordo::{Key, KeyedCollection};
///
/// let keyed: KeyedCollection<_> = KeyedCollection::from_pairs([("one", "item1"), ("two", "item2")]);
/// assert_eq!(keyed.get(&Key::from("two")), Some(&"item2"));
/// assert_eq!(keyed.get_at_index(1), Some(&"item2"));
/// assert_eq!(keyed.to_vec(), vec!["item1", "item2"]);
/// ```
#[derive(Clone)]
pub struct KeyedCollection<T, K = Key> {
    pub(crate) keys: Vec<K>,
    pub(crate) index: KeyIndex<K>,
    pub(crate) values: Collection<T>,
}

impl<T, K> Default for KeyedCollection<T, K> {
    fn default() -> Self {
        Self {
            keys: Vec::default(),
            index: KeyIndex::default(),
            values: Collection::default(),
        }
    }
}

impl<T: Debug, K: Debug> Debug for KeyedCollection<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().zip(self.values.items.iter()))
            .finish()
    }
}

impl<T: PartialEq, K: PartialEq> PartialEq for KeyedCollection<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<T: Eq, K: Eq> Eq for KeyedCollection<T, K> {}

impl<T> KeyedCollection<T, Key> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, K> KeyedCollection<T, K> {
    /// Keys in insertion order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Iterate over `(&key, &value)` pairs in insertion order.
    pub fn entries(&self) -> Entries<'_, K, T> {
        Entries::new(&self.keys, &self.values.items)
    }

    /// The values alone, as an ordered collection.
    pub fn as_collection(&self) -> &Collection<T> {
        &self.values
    }

    /// Discard the keys.
    pub fn into_collection(self) -> Collection<T> {
        self.values
    }

    /// The first key whose value is equal to the given one.
    pub fn key_of<Q: ?Sized>(&self, value: &Q) -> Option<&K>
    where
        T: PartialEq<Q>,
    {
        self.values
            .position_of(value)
            .and_then(|idx| self.keys.get(idx))
    }
}

impl<T, K: Hash + Eq + Clone> KeyedCollection<T, K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            index: KeyIndex::with_capacity(capacity),
            values: Collection {
                items: Vec::with_capacity(capacity),
            },
        }
    }

    /// Build from key/value pairs.
    ///
    /// A repeated key overwrites the earlier value,
    /// which keeps the position of the key's first appearance.
    pub fn from_pairs<Q: Into<K>, I: IntoIterator<Item = (Q, T)>>(pairs: I) -> Self {
        let iter = pairs.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            out.insert(k.into(), v);
        }
        out
    }

    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.index.get(key).map(|idx| &self.values.items[*idx])
    }

    pub fn try_get(&self, key: &K) -> Result<&T, KeyAbsent<K>>
    where
        K: Debug,
    {
        self.get(key).ok_or_else(|| KeyAbsent::from(key.clone()))
    }

    /// Whether a value is associated with the given key.
    pub fn has_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.index.contains_key(key)
    }

    /// Position of the given key's value in the ordered view.
    pub fn position_of_key<Q: ?Sized>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.index.get(key).copied()
    }

    /// Insert a value, overwriting in place if the key exists.
    ///
    /// Returns the previous value, if present.
    pub(crate) fn insert(&mut self, key: K, value: T) -> Option<T> {
        if let Some(idx) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.values.items[*idx], value));
        }
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.values.items.push(value);
        None
    }

    /// Remove the entry at the given position, shifting later entries down.
    pub(crate) fn remove_at(&mut self, idx: usize) -> (K, T) {
        let key = self.keys.remove(idx);
        let value = self.values.items.remove(idx);
        self.index.remove(&key);
        for (offset, k) in self.keys[idx..].iter().enumerate() {
            if let Some(pos) = self.index.get_mut(k) {
                *pos = idx + offset;
            }
        }
        (key, value)
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
        self.values.items.clear();
    }
}

impl<T, K> Deref for KeyedCollection<T, K> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl<T: Clone, K> ToOrdered<T> for KeyedCollection<T, K> {
    fn to_ordered(&self) -> Vec<T> {
        self.values.items.clone()
    }
}

impl<T, K: Hash + Eq + Clone> FromIterator<(K, T)> for KeyedCollection<T, K> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<T, K: Hash + Eq + Clone, const N: usize> From<[(K, T); N]> for KeyedCollection<T, K> {
    fn from(arr: [(K, T); N]) -> Self {
        Self::from_pairs(arr)
    }
}

impl<T, K> From<KeyedCollection<T, K>> for Collection<T> {
    fn from(value: KeyedCollection<T, K>) -> Self {
        value.values
    }
}

/// Iterates `(position, &value)` like [Collection]; use [KeyedCollection::entries] for keys.
impl<'c, T, K> IntoIterator for &'c KeyedCollection<T, K> {
    type Item = (usize, &'c T);
    type IntoIter = Iter<'c, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T, K> IntoIterator for KeyedCollection<T, K> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::make_keyed;

    #[test]
    fn construct() {
        let k = make_keyed();
        assert_eq!(k.count(), 3);
        assert_eq!(
            k.keys(),
            &[Key::from("a"), Key::from(7), Key::from("c")][..]
        );
        assert_eq!(k.to_vec(), vec!["alpha", "seven", "gamma"]);
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let k: KeyedCollection<_> = KeyedCollection::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(k.count(), 2);
        assert_eq!(k.to_vec(), vec![3, 2]);
        assert_eq!(k.get(&Key::from("a")), Some(&3));
    }

    #[test]
    fn strips_keys() {
        let k = make_keyed();
        assert_eq!(k.get_at_index(1), Some(&"seven"));
        assert_eq!(k.get_at_index(7), None);
        assert_eq!(k.get_at_index("a"), None);
        let plain = Collection::from_collection(&k);
        assert_eq!(plain.to_vec(), vec!["alpha", "seven", "gamma"]);
    }

    #[test]
    fn get() {
        let k = make_keyed();
        assert_eq!(k.get(&Key::from(7)), Some(&"seven"));
        assert_eq!(k.get(&Key::from("7")), Some(&"seven"));
        assert_eq!(k.get(&Key::from("07")), None);
        assert!(k.has_key(&Key::from("c")));
        assert!(!k.has_key(&Key::from("z")));
        assert_eq!(k.position_of_key(&Key::from("c")), Some(2));
    }

    #[test]
    fn try_get() {
        let k = make_keyed();
        assert_eq!(k.try_get(&Key::from("a")).unwrap(), &"alpha");
        let err = k.try_get(&Key::from("z")).unwrap_err();
        assert_eq!(err.key(), &Key::from("z"));
    }

    #[test]
    fn key_of() {
        let k = make_keyed();
        assert_eq!(k.key_of(&"gamma"), Some(&Key::from("c")));
        assert_eq!(k.key_of(&"delta"), None);
    }

    #[test]
    fn borrowed_keys() {
        let k: KeyedCollection<u8, String> =
            [("x".to_string(), 1), ("y".to_string(), 2)].into_iter().collect();
        assert_eq!(k.get("y"), Some(&2));
        assert!(k.has_key("x"));
    }

    #[test]
    fn entries() {
        let k = make_keyed();
        let pairs: Vec<_> = k.entries().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(
            pairs,
            vec![
                ("\"a\"".to_string(), "alpha"),
                ("7".to_string(), "seven"),
                ("\"c\"".to_string(), "gamma"),
            ]
        );
        assert_eq!(k.keys().len(), 3);
    }

    #[test]
    fn iterates_positions() {
        let k: KeyedCollection<_> = KeyedCollection::from_pairs([("one", 'a'), ("two", 'b')]);
        let mut seen = Vec::new();
        for (idx, v) in &k {
            seen.push((idx, *v));
        }
        assert_eq!(seen, vec![(0, 'a'), (1, 'b')]);

        let owned: Vec<_> = k.into_iter().collect();
        assert_eq!(owned, vec![(0, 'a'), (1, 'b')]);
    }

    #[test]
    fn remove_at_reindexes() {
        let mut k = make_keyed();
        let (key, value) = k.remove_at(0);
        assert_eq!(key, Key::from("a"));
        assert_eq!(value, "alpha");
        assert_eq!(k.position_of_key(&Key::from(7)), Some(0));
        assert_eq!(k.position_of_key(&Key::from("c")), Some(1));
        assert_eq!(k.get(&Key::from("c")), Some(&"gamma"));
    }

    #[test]
    fn transforms_drop_keys() {
        let k = make_keyed();
        let upper: Collection<String> = k.map(|v| v.to_uppercase());
        assert_eq!(upper.get_at_index(0), Some(&"ALPHA".to_string()));
        let filtered = k.filter(|v| v.starts_with('s'));
        assert_eq!(filtered.to_vec(), vec!["seven"]);
        assert_eq!(filtered.get_at_index(0), Some(&"seven"));
    }
}
