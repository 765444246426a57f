//! The polymorphic collection the key-aware combinators iterate over.
//!
//! Sequences and string-keyed mappings are unified behind a single tagged
//! union, [`Collection`], whose [`entries`](Collection::entries) iterator
//! yields `(key, value)` pairs in a defined order: ascending numeric position
//! for sequences, insertion order for mappings. Every key-aware combinator in
//! this crate is built on that one primitive.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The position of an entry within a [`Collection`].
///
/// Sequence entries are keyed by their numeric index, mapping entries by
/// their property name. `Display` renders the index as a plain decimal and
/// the name verbatim, so keys interpolate cleanly into formatted strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    /// Zero-based position within a sequence.
    Index(usize),
    /// Property name within a mapping.
    Name(String),
}

impl Key {
    /// The numeric index, if this key belongs to a sequence entry.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// The property name, if this key belongs to a mapping entry.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// An indexable collection: either an ordered sequence of values or an
/// insertion-ordered mapping from string keys to values.
///
/// The serde representation is untagged, so a `Collection` round-trips as a
/// plain JSON array or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    /// Ordered sequence, keyed by position.
    Seq(Vec<T>),
    /// String-keyed mapping, iterated in insertion order.
    Map(IndexMap<String, T>),
}

impl<T> Collection<T> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Collection::Seq(items) => items.len(),
            Collection::Map(entries) => entries.len(),
        }
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(key, value)` pairs in the collection's defined order.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            inner: match self {
                Collection::Seq(items) => EntriesInner::Seq(items.iter().enumerate()),
                Collection::Map(entries) => EntriesInner::Map(entries.iter()),
            },
        }
    }

    /// Rebuild the collection with the same shape and keys, replacing each
    /// value with `f(value, key)`.
    pub fn map_values<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&T, &Key) -> U,
    {
        match self {
            Collection::Seq(items) => Collection::Seq(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| f(value, &Key::Index(index)))
                    .collect(),
            ),
            Collection::Map(entries) => Collection::Map(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), f(value, &Key::Name(name.clone()))))
                    .collect(),
            ),
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection::Seq(items)
    }
}

impl<T> From<IndexMap<String, T>> for Collection<T> {
    fn from(entries: IndexMap<String, T>) -> Self {
        Collection::Map(entries)
    }
}

/// Iterator over the `(key, value)` pairs of a [`Collection`].
pub struct Entries<'a, T> {
    inner: EntriesInner<'a, T>,
}

enum EntriesInner<'a, T> {
    Seq(std::iter::Enumerate<std::slice::Iter<'a, T>>),
    Map(indexmap::map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Seq(iter) => iter.next().map(|(index, value)| (Key::Index(index), value)),
            EntriesInner::Map(iter) => iter
                .next()
                .map(|(name, value)| (Key::Name(name.clone()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Seq(iter) => iter.size_hint(),
            EntriesInner::Map(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
