use std::fmt::Debug;
use std::ops::Index;

use crate::error::{EmptyCollection, InvalidPosition};
use crate::iter::{IntoIter, Iter};
use crate::position::Position;

/// Anything which can produce an ordered view of its values.
///
/// This is the seam through which [Collection::from_collection]
/// accepts other data-holding types; implement it for domain objects
/// which keep their own collections internally.
pub trait ToOrdered<T> {
    /// Values in iteration order, with any keys discarded.
    fn to_ordered(&self) -> Vec<T>;
}

impl<T: Clone> ToOrdered<T> for [T] {
    fn to_ordered(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone> ToOrdered<T> for Vec<T> {
    fn to_ordered(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone, const N: usize> ToOrdered<T> for [T; N] {
    fn to_ordered(&self) -> Vec<T> {
        self.to_vec()
    }
}

/// An immutable, ordered container of values.
///
/// Positions are always dense and zero-based.
/// Every transform returns a new collection and leaves the receiver untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Debug> Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(arr: [T; N]) -> Self {
        Self {
            items: Vec::from(arr),
        }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(value: Collection<T>) -> Self {
        value.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> ToOrdered<T> for Collection<T> {
    fn to_ordered(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from any source of ordered values.
    ///
    /// ```
    /// use ordo::{Collection, MutableKeyedCollection};
    ///
    /// let mut keyed = MutableKeyedCollection::new();
    /// keyed.add("b", 2).add("a", 1);
    /// let plain = Collection::from_collection(&keyed);
    /// assert_eq!(plain.to_vec(), vec![2, 1]);
    /// ```
    pub fn from_collection<S: ToOrdered<T> + ?Sized>(source: &S) -> Self {
        Self {
            items: source.to_ordered(),
        }
    }

    /// Build a collection from key/value pairs, discarding the keys.
    pub fn from_pairs<K, I: IntoIterator<Item = (K, T)>>(pairs: I) -> Self {
        pairs.into_iter().map(|(_, v)| v).collect()
    }

    /// Iterate over `(position, &value)` pairs.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    /// Iterate over values alone.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any value is equal to the given one.
    ///
    /// Comparison may be heterogeneous, e.g. a `Collection<String>` can be queried with a `&str`.
    pub fn has<Q: ?Sized>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        self.has_by(value, |a, b| a == b)
    }

    /// Whether any value is equal to the given one, according to `eq`.
    pub fn has_by<Q: ?Sized, F: Fn(&T, &Q) -> bool>(&self, value: &Q, eq: F) -> bool {
        self.items.iter().any(|item| eq(item, value))
    }

    /// Get the value at the given position.
    ///
    /// Never panics: out-of-range or malformed positions (negative numbers, non-numeric strings)
    /// give [None].
    ///
    /// ```
    /// use ordo::Collection;
    ///
    /// let c = Collection::from(["item1", "item2"]);
    /// assert_eq!(c.get_at_index(1), Some(&"item2"));
    /// assert_eq!(c.get_at_index("1"), Some(&"item2"));
    /// assert_eq!(c.get_at_index(2), None);
    /// assert_eq!(c.get_at_index("potato"), None);
    /// ```
    pub fn get_at_index<P: Position>(&self, index: P) -> Option<&T> {
        self.try_get_at_index(index).ok()
    }

    /// As [Collection::get_at_index], but reports why the lookup failed.
    pub fn try_get_at_index<P: Position>(&self, index: P) -> Result<&T, InvalidPosition> {
        let idx = index.to_position()?;
        self.items.get(idx).ok_or(InvalidPosition::OutOfRange {
            index: idx,
            len: self.items.len(),
        })
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Position of the first value equal to the given one.
    pub fn position_of<Q: ?Sized>(&self, value: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Produce a new collection by applying `f` to every value.
    ///
    /// The result always has the same length as the receiver;
    /// colliding outputs are retained.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Collection<U> {
        self.items.iter().map(f).collect()
    }

    /// Fold over the values, starting from `initial`.
    ///
    /// Over an empty collection, `initial` is returned unchanged.
    ///
    /// ```
    /// use ordo::Collection;
    ///
    /// let c = Collection::from([1, 2, 3]);
    /// assert_eq!(c.fold(5, |carry, item| carry - item), -1);
    /// ```
    pub fn fold<A, F: FnMut(A, &T) -> A>(&self, initial: A, f: F) -> A {
        self.items.iter().fold(initial, f)
    }

    /// Visit every value in order.
    pub fn each<F: FnMut(usize, &T)>(&self, mut f: F) {
        for (idx, item) in self.iter() {
            f(idx, item);
        }
    }
}

impl<T: Clone> Collection<T> {
    /// Owned values in order; positions are dense and zero-based.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// The first value satisfying the predicate, if any.
    ///
    /// The value is cloned: nothing the caller does with the result
    /// can affect the collection.
    pub fn get_where<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> Option<T> {
        self.items.iter().find(|item| predicate(item)).cloned()
    }

    /// A new collection of the values satisfying the predicate, in their original order.
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> Self {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Fold over the values using the first as the initial accumulator.
    ///
    /// Returns [None] for an empty collection;
    /// use [Collection::fold] to supply an initial value.
    ///
    /// ```
    /// use ordo::Collection;
    ///
    /// let c = Collection::from([1, 2, 3, 4, 5]);
    /// assert_eq!(c.reduce(|carry, item| carry + item), Some(15));
    /// assert_eq!(Collection::<i32>::new().reduce(|a, b| a + b), None);
    /// ```
    pub fn reduce<F: FnMut(T, &T) -> T>(&self, f: F) -> Option<T> {
        let mut it = self.items.iter();
        let first = it.next()?.clone();
        Some(it.fold(first, f))
    }

    /// As [Collection::reduce], but an empty collection is an error.
    pub fn try_reduce<F: FnMut(T, &T) -> T>(&self, f: F) -> Result<T, EmptyCollection> {
        self.reduce(f).ok_or(EmptyCollection)
    }

    /// Values which are not equal to any value in any of the other collections.
    ///
    /// ```
    /// use ordo::Collection;
    ///
    /// let c = Collection::from([1, 2, 3]);
    /// let d = c.diff(&[&Collection::from([1, 4, 5]), &Collection::from([1, 6, 7])]);
    /// assert_eq!(d.to_vec(), vec![2, 3]);
    /// ```
    pub fn diff<O>(&self, others: &[&Collection<O>]) -> Self
    where
        T: PartialEq<O>,
    {
        self.diff_by(others, |a, b| a == b)
    }

    /// As [Collection::diff], according to `eq`.
    pub fn diff_by<O, F: Fn(&T, &O) -> bool>(&self, others: &[&Collection<O>], eq: F) -> Self {
        self.filter(|item| !others.iter().any(|other| other.has_by(item, |o, i| eq(i, o))))
    }

    /// Values which are equal to at least one value in every one of the other collections.
    ///
    /// With no other collections, every value is kept.
    ///
    /// ```
    /// use ordo::Collection;
    ///
    /// let c = Collection::from([1, 2, 3]);
    /// let i = c.intersect(&[&Collection::from([1, 4, 5]), &Collection::from([1, 6, 7])]);
    /// assert_eq!(i.to_vec(), vec![1]);
    /// ```
    pub fn intersect<O>(&self, others: &[&Collection<O>]) -> Self
    where
        T: PartialEq<O>,
    {
        self.intersect_by(others, |a, b| a == b)
    }

    /// As [Collection::intersect], according to `eq`.
    pub fn intersect_by<O, F: Fn(&T, &O) -> bool>(
        &self,
        others: &[&Collection<O>],
        eq: F,
    ) -> Self {
        self.filter(|item| others.iter().all(|other| other.has_by(item, |o, i| eq(i, o))))
    }

    /// Concatenate the receiver's values with those of each other collection, in order.
    ///
    /// Duplicates are retained.
    ///
    /// ```
    /// use ordo::Collection;
    ///
    /// let c = Collection::from([1]);
    /// let m = c.merge(&[&Collection::from([2]), &Collection::from([1, 3])]);
    /// assert_eq!(m.to_vec(), vec![1, 2, 1, 3]);
    /// ```
    pub fn merge(&self, others: &[&Collection<T>]) -> Self {
        let len = self.items.len() + others.iter().map(|o| o.items.len()).sum::<usize>();
        let mut items = Vec::with_capacity(len);
        items.extend_from_slice(&self.items);
        for other in others {
            items.extend_from_slice(&other.items);
        }
        Self { items }
    }
}

impl<T, P: Position> Index<P> for Collection<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the position is malformed or out of range;
    /// use [Collection::get_at_index] for a total lookup.
    fn index(&self, index: P) -> &Self::Output {
        match self.try_get_at_index(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'c, T> IntoIterator for &'c Collection<T> {
    type Item = (usize, &'c T);
    type IntoIter = Iter<'c, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}
