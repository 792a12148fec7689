use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::Deref;

use crate::iter::{IntoIter, Iter};
use crate::util::remove_first;
use crate::{Collection, Key, KeyedCollection, ToOrdered};

/// A [Collection] which can be appended to and removed from in place.
///
/// Mutators return the receiver so that calls can be chained.
///
/// ```
/// use ordo::MutableCollection;
///
/// let mut c = MutableCollection::new();
/// c.add(1).add(2).add(3).remove(&2);
/// assert_eq!(c.to_vec(), vec![1, 3]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MutableCollection<T> {
    inner: Collection<T>,
}

impl<T> Default for MutableCollection<T> {
    fn default() -> Self {
        Self {
            inner: Collection::default(),
        }
    }
}

impl<T: Debug> Debug for MutableCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T> MutableCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.inner.items.push(value);
        self
    }

    /// Remove the first value equal to the given one, if any.
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> &mut Self
    where
        T: PartialEq<Q>,
    {
        self.remove_where(|item| item == value)
    }

    /// Remove the first value satisfying the predicate, if any.
    pub fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> &mut Self {
        remove_first(&mut self.inner.items, predicate);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.inner.items.clear();
        self
    }

    /// Stop mutating, keeping the values.
    pub fn freeze(self) -> Collection<T> {
        self.inner
    }
}

impl<T> Deref for MutableCollection<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> From<Collection<T>> for MutableCollection<T> {
    fn from(inner: Collection<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<Vec<T>> for MutableCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            inner: Collection::from(items),
        }
    }
}

impl<T> From<MutableCollection<T>> for Collection<T> {
    fn from(value: MutableCollection<T>) -> Self {
        value.inner
    }
}

impl<T> FromIterator<T> for MutableCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for MutableCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<'c, T> IntoIterator for &'c MutableCollection<T> {
    type Item = (usize, &'c T);
    type IntoIter = Iter<'c, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> IntoIterator for MutableCollection<T> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: Clone> ToOrdered<T> for MutableCollection<T> {
    fn to_ordered(&self) -> Vec<T> {
        self.inner.to_ordered()
    }
}

/// A [KeyedCollection] which can be inserted into and removed from in place.
///
/// Mutators return the receiver so that calls can be chained.
/// The key-free [Collection] read surface is available through [Deref].
///
/// ```
/// use ordo::{Key, MutableKeyedCollection};
///
/// let mut c = MutableKeyedCollection::new();
/// c.add("key", "value").add("key2", "value2").add(3, "value3");
/// c.remove(&"value2");
/// assert!(!c.has_key(&Key::from("key2")));
/// assert_eq!(c.to_vec(), vec!["value", "value3"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MutableKeyedCollection<T, K = Key> {
    inner: KeyedCollection<T, K>,
}

impl<T, K> Default for MutableKeyedCollection<T, K> {
    fn default() -> Self {
        Self {
            inner: KeyedCollection::default(),
        }
    }
}

impl<T: Debug, K: Debug> Debug for MutableKeyedCollection<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T> MutableKeyedCollection<T, Key> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, K: Hash + Eq + Clone> MutableKeyedCollection<T, K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: KeyedCollection::with_capacity(capacity),
        }
    }

    /// Build from key/value pairs; see [KeyedCollection::from_pairs].
    pub fn from_pairs<Q: Into<K>, I: IntoIterator<Item = (Q, T)>>(pairs: I) -> Self {
        Self {
            inner: KeyedCollection::from_pairs(pairs),
        }
    }

    /// Associate a value with a key.
    ///
    /// If the key already exists, its value is overwritten
    /// and the key keeps its original position.
    pub fn add<Q: Into<K>>(&mut self, key: Q, value: T) -> &mut Self {
        self.inner.insert(key.into(), value);
        self
    }

    /// As [MutableKeyedCollection::add], but returns the replaced value, if any.
    pub fn insert<Q: Into<K>>(&mut self, key: Q, value: T) -> Option<T> {
        self.inner.insert(key.into(), value)
    }

    /// Remove the first entry whose value is equal to the given one, if any.
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> &mut Self
    where
        T: PartialEq<Q>,
    {
        self.remove_where(|item| item == value)
    }

    /// Remove the first entry whose value satisfies the predicate, if any.
    pub fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> &mut Self {
        if let Some(idx) = self.inner.values.items.iter().position(predicate) {
            self.inner.remove_at(idx);
        }
        self
    }

    /// Remove the entry for the given key, if present.
    pub fn remove_by_key<Q: ?Sized>(&mut self, key: &Q) -> &mut Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.take(key);
        self
    }

    /// Remove the entry for the given key, returning its value.
    pub fn take<Q: ?Sized>(&mut self, key: &Q) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let idx = self.inner.position_of_key(key)?;
        Some(self.inner.remove_at(idx).1)
    }

    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let idx = self.inner.position_of_key(key)?;
        self.inner.values.items.get_mut(idx)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    /// Stop mutating, keeping keys and values.
    pub fn freeze(self) -> KeyedCollection<T, K> {
        self.inner
    }

    /// Discard the keys.
    pub fn into_collection(self) -> Collection<T> {
        self.inner.into_collection()
    }
}

impl<T, K> Deref for MutableKeyedCollection<T, K> {
    type Target = KeyedCollection<T, K>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, K> From<KeyedCollection<T, K>> for MutableKeyedCollection<T, K> {
    fn from(inner: KeyedCollection<T, K>) -> Self {
        Self { inner }
    }
}

impl<T, K> From<MutableKeyedCollection<T, K>> for Collection<T> {
    fn from(value: MutableKeyedCollection<T, K>) -> Self {
        value.inner.values
    }
}

impl<T, K: Hash + Eq + Clone> FromIterator<(K, T)> for MutableKeyedCollection<T, K> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<T, K: Hash + Eq + Clone, const N: usize> From<[(K, T); N]> for MutableKeyedCollection<T, K> {
    fn from(arr: [(K, T); N]) -> Self {
        Self::from_pairs(arr)
    }
}

impl<T, K: Hash + Eq + Clone> Extend<(K, T)> for MutableKeyedCollection<T, K> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.inner.insert(k, v);
        }
    }
}

impl<'c, T, K> IntoIterator for &'c MutableKeyedCollection<T, K> {
    type Item = (usize, &'c T);
    type IntoIter = Iter<'c, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T, K> IntoIterator for MutableKeyedCollection<T, K> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: Clone, K> ToOrdered<T> for MutableKeyedCollection<T, K> {
    fn to_ordered(&self) -> Vec<T> {
        self.inner.to_ordered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pair() -> MutableKeyedCollection<&'static str> {
        MutableKeyedCollection::from_pairs([("key", "value"), ("key2", "value2")])
    }

    #[test]
    fn add() {
        let mut c: MutableKeyedCollection<&str> = MutableKeyedCollection::from_pairs([("key", "value")]);
        let chained: *const _ = c.add("key2", "value2");

        assert_eq!(c.count(), 2);
        assert!(std::ptr::eq(chained, &c));
        assert!(c.has_key(&Key::from("key2")));
    }

    #[test]
    fn add_overwrites_in_place() {
        let mut c = make_pair();
        c.add("key", "replaced");
        assert_eq!(c.count(), 2);
        assert_eq!(c.to_vec(), vec!["replaced", "value2"]);
        assert_eq!(c.insert("key2", "again"), Some("value2"));
        assert_eq!(c.get_at_index(1), Some(&"again"));
    }

    #[test]
    fn integer_keys() {
        let mut c = MutableKeyedCollection::new();
        c.add(10, 'a').add("x", 'b').add(0, 'c');
        assert_eq!(c.count(), 3);
        assert_eq!(c.get(&Key::from(10)), Some(&'a'));
        assert_eq!(c.get(&Key::from("x")), Some(&'b'));
        // positions are dense regardless of integer keys
        assert_eq!(c.get_at_index(0), Some(&'a'));
        assert_eq!(c.get_at_index(2), Some(&'c'));
    }

    #[test]
    fn numeric_string_keys_are_integer_keys() {
        let mut c = MutableKeyedCollection::new();
        c.add(10, 'a').add("10", 'b');
        assert_eq!(c.count(), 1);
        assert!(c.has_key(&Key::from("10")));
        assert!(c.has_key(&Key::from(10)));
        assert_eq!(c.get_at_index(0), Some(&'b'));

        c.add("010", 'c');
        assert_eq!(c.count(), 2);
        c.remove_by_key(&Key::from("10"));
        assert_eq!(c.to_vec(), vec!['c']);
    }

    #[test]
    fn remove() {
        let mut c = make_pair();
        let chained: *const _ = c.remove(&"value2");

        assert_eq!(c.count(), 1);
        assert!(std::ptr::eq(chained, &c));
        assert!(!c.has_key(&Key::from("key2")));
    }

    #[test]
    fn remove_first_match_only() {
        let mut c: MutableKeyedCollection<i32> =
            MutableKeyedCollection::from_pairs([("a", 1), ("b", 2), ("c", 1)]);
        c.remove(&1);
        assert_eq!(c.keys(), &[Key::from("b"), Key::from("c")][..]);
        assert_eq!(c.get(&Key::from("c")), Some(&1));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut c = make_pair();
        c.remove(&"missing").remove_by_key(&Key::from("missing"));
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn remove_by_key() {
        let mut c = make_pair();
        let chained: *const _ = c.remove_by_key(&Key::from("key2"));

        assert_eq!(c.count(), 1);
        assert!(std::ptr::eq(chained, &c));
        assert!(!c.has_key(&Key::from("key2")));
    }

    #[test]
    fn remove_reindexes() {
        let mut c = MutableKeyedCollection::new();
        c.add("a", 1).add("b", 2).add("c", 3).remove_by_key(&Key::from("a"));
        assert_eq!(c.get_at_index(0), Some(&2));
        assert_eq!(c.get(&Key::from("c")), Some(&3));
        c.add("a", 4);
        assert_eq!(c.to_vec(), vec![2, 3, 4]);
        assert_eq!(c.take(&Key::from("b")), Some(2));
        assert_eq!(c.get(&Key::from("a")), Some(&4));
    }

    #[test]
    fn get_mut() {
        let mut c: MutableKeyedCollection<Vec<u8>, String> = MutableKeyedCollection::with_capacity(1);
        c.add("v", vec![1]);
        c.get_mut("v").unwrap().push(2);
        assert_eq!(c.get("v"), Some(&vec![1, 2]));
        assert!(c.get_mut("w").is_none());
    }

    #[test]
    fn read_surface() {
        let c = make_pair();
        assert!(c.has(&"value"));
        assert_eq!(c.map(|v| v.len()).to_vec(), vec![5, 6]);
        let merged = c.merge(&[&Collection::from(["value"])]);
        assert_eq!(merged.to_vec(), vec!["value", "value2", "value"]);
        let frozen = c.clone().freeze();
        assert_eq!(frozen, *c);
        assert_eq!(c.into_collection().to_vec(), vec!["value", "value2"]);
    }

    #[test]
    fn iterates_positions() {
        let mut c = make_pair();
        c.remove_by_key(&Key::from("key"));
        let pairs: Vec<_> = (&c).into_iter().collect();
        assert_eq!(pairs, vec![(0, &"value2")]);
        let owned: Vec<_> = c.into_iter().collect();
        assert_eq!(owned, vec![(0, "value2")]);

        let m = MutableCollection::from(vec!['x', 'y']);
        let mut seen = Vec::new();
        for (idx, v) in &m {
            seen.push((idx, *v));
        }
        assert_eq!(seen, vec![(0, 'x'), (1, 'y')]);
    }

    #[test]
    fn clear() {
        let mut c = make_pair();
        c.clear().add("x", "y");
        assert_eq!(c.count(), 1);
        assert_eq!(c.position_of_key(&Key::from("x")), Some(0));
    }

    #[test]
    fn mutable_collection() {
        let mut c = MutableCollection::from(vec![1, 2, 1]);
        let chained: *const _ = c.add(4);
        assert!(std::ptr::eq(chained, &c));
        assert_eq!(c.count(), 4);

        c.remove(&1);
        assert_eq!(c.to_vec(), vec![2, 1, 4]);
        c.remove(&9);
        assert_eq!(c.count(), 3);

        c.remove_where(|v| *v > 3);
        assert_eq!(c.clone().freeze().to_vec(), vec![2, 1]);

        c.clear();
        assert!(c.is_empty());
    }
}
