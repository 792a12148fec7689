use std::iter::FusedIterator;

/// Iterate over `(position, &value)` pairs in insertion order.
///
/// Positions are always dense, starting from 0.
#[derive(Debug, Clone)]
pub struct Iter<'c, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'c, T>>,
}

impl<'c, T> Iter<'c, T> {
    pub(crate) fn new(items: &'c [T]) -> Self {
        Self {
            inner: items.iter().enumerate(),
        }
    }
}

impl<'c, T> Iterator for Iter<'c, T> {
    type Item = (usize, &'c T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'c, T> DoubleEndedIterator for Iter<'c, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'c, T> ExactSizeIterator for Iter<'c, T> {}

impl<'c, T> FusedIterator for Iter<'c, T> {}

/// Owning iterator over `(position, value)` pairs in insertion order.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::iter::Enumerate<std::vec::IntoIter<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            inner: items.into_iter().enumerate(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Iterate over `(&key, &value)` pairs of a keyed collection in insertion order.
#[derive(Debug, Clone)]
pub struct Entries<'c, K, T> {
    inner: std::iter::Zip<std::slice::Iter<'c, K>, std::slice::Iter<'c, T>>,
}

impl<'c, K, T> Entries<'c, K, T> {
    pub(crate) fn new(keys: &'c [K], values: &'c [T]) -> Self {
        Self {
            inner: keys.iter().zip(values.iter()),
        }
    }
}

impl<'c, K, T> Iterator for Entries<'c, K, T> {
    type Item = (&'c K, &'c T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'c, K, T> DoubleEndedIterator for Entries<'c, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'c, K, T> ExactSizeIterator for Entries<'c, K, T> {}
