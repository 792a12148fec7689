//! Ordered and keyed generic collections.
//!
//! [Collection] is an immutable, ordered container whose positions are always dense and zero-based.
//! Its transforms ([map](Collection::map), [filter](Collection::filter), [diff](Collection::diff),
//! [intersect](Collection::intersect), [merge](Collection::merge)) return new collections.
//!
//! [KeyedCollection] associates values with unique keys, preserving insertion order.
//! [MutableCollection] and [MutableKeyedCollection] add chainable in-place mutation.
//! All of them dereference to the layer below, down to [Collection],
//! whose read surface never exposes keys.
//!
//! Equality is value-based, via [PartialEq];
//! `_by` variants accept a custom equality (see [equality]).
//! Collections do no internal locking: mutation needs `&mut`.
mod collection;
pub use collection::{Collection, ToOrdered};

mod keyed;
pub use keyed::KeyedCollection;

mod mutable;
pub use mutable::{MutableCollection, MutableKeyedCollection};

mod key;
pub use key::Key;

pub mod equality;
pub mod error;
pub mod iter;
pub mod position;
pub use position::Position;

mod hash;
mod util;

#[cfg(feature = "debug")]
pub mod debug;
