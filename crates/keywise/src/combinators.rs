//! The key-aware combinator family and the collection helpers built on it.
//!
//! Each combinator is curried the same way: configuration (the callback)
//! first, then a closure over the data. Callbacks always receive
//! `(value, key)`, with the key drawn from [`Collection::entries`].

use crate::collection::{Collection, Key};
use crate::one_or_many::{ensure_vec, OneOrMany};
use indexmap::IndexMap;

/// Element-wise map that also exposes each entry's key.
///
/// Returns the mapped results as a vector in the collection's iteration
/// order, for sequences and mappings alike.
///
/// ```
/// use keywise::{fmap_with_key, Collection};
///
/// let seq = Collection::from(vec!["a", "b"]);
/// let labelled = fmap_with_key(|value, key| format!("{key}{value}"))(&seq);
/// assert_eq!(labelled, vec!["0a", "1b"]);
/// ```
pub fn fmap_with_key<T, U, F>(mut f: F) -> impl FnMut(&Collection<T>) -> Vec<U>
where
    F: FnMut(&T, &Key) -> U,
{
    move |collection| {
        collection
            .entries()
            .map(|(key, value)| f(value, &key))
            .collect()
    }
}

/// Key-aware map that keeps the collection's shape, replacing each value
/// with `f(value, key)` under its original key.
pub fn fmap_values_with_key<T, U, F>(mut f: F) -> impl FnMut(&Collection<T>) -> Collection<U>
where
    F: FnMut(&T, &Key) -> U,
{
    move |collection| collection.map_values(&mut f)
}

/// Key-aware iteration for side effects only.
pub fn feach_with_key<T, F>(mut f: F) -> impl FnMut(&Collection<T>)
where
    F: FnMut(&T, &Key),
{
    move |collection| {
        for (key, value) in collection.entries() {
            f(value, &key);
        }
    }
}

/// Key-aware map where the callback returns a vector per entry; the results
/// are concatenated one level into a single vector, preserving iteration
/// order. Returning an empty vector filters the entry out.
pub fn fflat_map_with_key<T, U, F>(mut f: F) -> impl FnMut(&Collection<T>) -> Vec<U>
where
    F: FnMut(&T, &Key) -> Vec<U>,
{
    move |collection| {
        collection
            .entries()
            .flat_map(|(key, value)| f(value, &key))
            .collect()
    }
}

/// Build a mapping by turning every entry into a `(key, value)` pair.
///
/// When two entries produce the same key, the later one wins while the key
/// keeps its first-insertion position.
pub fn map_to_object<T, U, F>(mut to_pair: F) -> impl FnMut(&Collection<T>) -> IndexMap<String, U>
where
    F: FnMut(&T, &Key) -> (String, U),
{
    move |collection| {
        let pairs = fmap_with_key(&mut to_pair)(collection);
        pairs.into_iter().collect()
    }
}

/// A new vector with the elements in reverse order; the input is left
/// untouched.
pub fn reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    let mut out = seq.to_vec();
    out.reverse();
    out
}

/// Drop the named properties from a mapping.
///
/// Accepts a single key or a list of keys. Keys that are not present are
/// ignored; surviving entries keep their relative order.
///
/// ```
/// use indexmap::indexmap;
/// use keywise::remove_props;
///
/// let scores = indexmap! {"a".to_string() => 1, "b".to_string() => 2};
/// assert_eq!(remove_props("a")(&scores), indexmap! {"b".to_string() => 2});
/// ```
pub fn remove_props<V>(
    keys: impl Into<OneOrMany<String>>,
) -> impl Fn(&IndexMap<String, V>) -> IndexMap<String, V>
where
    V: Clone,
{
    let removed = ensure_vec(keys);
    move |map| {
        map.iter()
            .filter(|(name, _)| !removed.iter().any(|r| r == *name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// Insert a divider between every pair of adjacent elements.
///
/// The divider is computed per position from the element that will follow
/// it. The first element is never preceded by a divider, so empty and
/// single-element inputs come back as-is.
///
/// ```
/// use keywise::interleave;
///
/// let spaced = interleave(|_: &&str| "X")(&["a", "b", "c"]);
/// assert_eq!(spaced, vec!["a", "X", "b", "X", "c"]);
/// ```
pub fn interleave<T, F>(get_divider: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    move |seq| {
        let divide = |value: &T, key: &Key| match key.as_index() {
            Some(0) => vec![value.clone()],
            _ => vec![get_divider(value), value.clone()],
        };
        fflat_map_with_key(divide)(&Collection::from(seq.to_vec()))
    }
}
