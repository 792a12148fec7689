//! Equality strategies for the `_by` variants of the set operations.
//!
//! The plain operations ([has](crate::Collection::has), [diff](crate::Collection::diff),
//! [intersect](crate::Collection::intersect), [remove](crate::MutableKeyedCollection::remove))
//! use [PartialEq], which may be heterogeneous (`String` against `&str`).
//! Anything with the signature `Fn(&T, &U) -> bool` may be used instead.

/// Value equality via [PartialEq].
///
/// ```
/// use ordo::equality::loose_eq;
///
/// assert!(loose_eq(&String::from("a"), &"a"));
/// assert!(!loose_eq(&1, &2));
/// ```
pub fn loose_eq<T: PartialEq<U> + ?Sized, U: ?Sized>(a: &T, b: &U) -> bool {
    a == b
}

/// Equality for f64 where NaN equals NaN.
///
/// ```
/// use ordo::equality::nan_eq_f64;
///
/// assert!(nan_eq_f64(&f64::NAN, &f64::NAN));
/// assert!(!nan_eq_f64(&f64::NAN, &1.0));
/// ```
pub fn nan_eq_f64(a: &f64, b: &f64) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}

/// Equality for f32 where NaN equals NaN.
pub fn nan_eq_f32(a: &f32, b: &f32) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}

/// Build an equality from a key-extraction function:
/// two values are equal if their keys are.
///
/// ```
/// use ordo::{equality::by_key, Collection};
///
/// let words = Collection::from(vec!["Apple", "banana"]);
/// let other = Collection::from(vec!["APPLE"]);
/// let kept = words.diff_by(&[&other], by_key(|s: &&str| s.to_lowercase()));
/// assert_eq!(kept.to_vec(), vec!["banana"]);
/// ```
pub fn by_key<T: ?Sized, K: PartialEq, F: Fn(&T) -> K>(f: F) -> impl Fn(&T, &T) -> bool {
    move |a, b| f(a) == f(b)
}
