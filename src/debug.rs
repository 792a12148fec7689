use crate::{Collection, KeyedCollection, MutableKeyedCollection};
use ascii_tree::{write_tree, Tree as ATree};
pub use fastrand;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

impl<T: Debug, K: Debug> KeyedCollection<T, K> {
    /// Print an ASCII representation of the collection,
    /// one leaf per entry in insertion order.
    ///
    /// Mainly for debugging purposes.
    /// An `&mut` to an empty `String` makes for a good `w`.
    pub fn format_tree<W: core::fmt::Write>(&self, w: &mut W) -> core::fmt::Result {
        let lines = self
            .entries()
            .enumerate()
            .map(|(idx, (k, v))| format!("{idx}: {k:?} => {v:?}"))
            .collect();
        let name = format!("KeyedCollection ({})", self.count());
        let anode = if self.is_empty() {
            ATree::Leaf(vec![name])
        } else {
            ATree::Node(name, vec![ATree::Leaf(lines)])
        };
        write_tree(w, &anode)
    }
}

/// Utility for creating random collections.
pub struct CollectionGen<D, F: Fn(usize, &mut fastrand::Rng) -> D> {
    pub n_items: usize,
    /// The chance of an item repeating an earlier one (ignored for the first item).
    pub repeat_p: f64,
    /// A function to calculate the item based on its position and a random number generator.
    pub data_fn: F,
    _data: PhantomData<fn() -> D>,
}

impl<D: Clone, F: Fn(usize, &mut fastrand::Rng) -> D> CollectionGen<D, F> {
    pub fn new(n_items: usize, repeat_p: f64, data_fn: F) -> Self {
        Self {
            n_items,
            repeat_p,
            data_fn,
            _data: PhantomData,
        }
    }

    pub fn gen(&self, rng: &mut fastrand::Rng) -> Collection<D> {
        let mut items: Vec<D> = Vec::with_capacity(self.n_items);
        for idx in 0..self.n_items {
            if !items.is_empty() && rng.f64() < self.repeat_p {
                let prev = items[rng.usize(..items.len())].clone();
                items.push(prev);
            } else {
                items.push((self.data_fn)(idx, rng));
            }
        }
        Collection::from(items)
    }

    /// Generate a keyed collection, with keys produced by `key_fn`.
    ///
    /// Colliding keys overwrite, so the result may be shorter than `n_items`.
    pub fn gen_keyed<K, G>(&self, rng: &mut fastrand::Rng, key_fn: G) -> MutableKeyedCollection<D, K>
    where
        K: Hash + Eq + Clone,
        G: Fn(usize, &mut fastrand::Rng) -> K,
    {
        let values = self.gen(rng);
        let mut out = MutableKeyedCollection::with_capacity(values.count());
        for (idx, v) in values {
            let key = key_fn(idx, rng);
            out.add(key, v);
        }
        out
    }
}
