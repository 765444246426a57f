//! Coercion between a single value and a vector of values.

use serde::{Deserialize, Serialize};

/// An argument that may be supplied either as one value or as many.
///
/// The serde representation is untagged, so a `OneOrMany` deserializes from
/// either a bare value or an array of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// An already-sequenced list of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Collapse into a vector. A single value becomes a one-element vector;
    /// an existing vector passes through with its elements intact.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Normalize a single-or-many argument into a vector.
///
/// Idempotent after the first wrap: feeding the result back in returns an
/// equal vector.
pub fn ensure_vec<T>(value: impl Into<OneOrMany<T>>) -> Vec<T> {
    value.into().into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_vector_argument() {
        let argument = vec![1, 2, 3];
        assert_eq!(ensure_vec::<i32>(argument.clone()), argument);
    }

    #[test]
    fn wraps_single_argument_as_one_element_vector() {
        assert_eq!(ensure_vec::<String>("b"), vec!["b".to_string()]);
        assert_eq!(ensure_vec(7), vec![7]);
    }

    #[test]
    fn is_idempotent_after_first_wrap() {
        let once = ensure_vec(42);
        assert_eq!(ensure_vec::<i32>(once.clone()), once);
    }

    #[test]
    fn deserializes_from_bare_value_or_array() {
        let one: OneOrMany<i32> = serde_json::from_str("5").unwrap();
        assert_eq!(one, OneOrMany::One(5));

        let many: OneOrMany<i32> = serde_json::from_str("[5,6]").unwrap();
        assert_eq!(many, OneOrMany::Many(vec![5, 6]));
    }
}
