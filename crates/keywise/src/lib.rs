//! Key-aware functional combinators over sequences and mappings.
//!
//! This crate provides a small set of pure, stateless combinators whose
//! callbacks receive both the value and its key: the numeric index for
//! sequences, the property name for insertion-ordered mappings. Both
//! collection shapes are unified behind [`Collection`], and every key-aware
//! operation iterates through its single [`entries`](Collection::entries)
//! primitive.
//!
//! ## Key Components
//!
//! - **`collection`**: The [`Collection`] tagged union, its [`Key`] type,
//!   and the shared entries iterator.
//! - **`combinators`**: The key-aware map/each/flat-map family plus the
//!   helpers built on it (`map_to_object`, `remove_props`, `interleave`,
//!   `reversed`).
//! - **`compose`**: Pipeline plumbing ([`tap`], [`log`], [`call_with`]).
//! - **`one_or_many`**: Single-or-many argument coercion ([`ensure_vec`]).
//!
//! Combinators are curried: they take their callback first and return a
//! closure over the data, so they slot directly into composition pipelines.
//!
//! ```
//! use indexmap::indexmap;
//! use keywise::{fmap_with_key, Collection};
//!
//! let scores = Collection::from(indexmap! {"a".to_string() => 1, "b".to_string() => 2});
//! let labelled = fmap_with_key(|value, key| format!("{key}{value}"))(&scores);
//! assert_eq!(labelled, vec!["a1", "b2"]);
//! ```

pub mod collection;
pub mod combinators;
pub mod compose;
pub mod one_or_many;

pub use self::{
    collection::{Collection, Entries, Key},
    combinators::{
        feach_with_key, fflat_map_with_key, fmap_values_with_key, fmap_with_key, interleave,
        map_to_object, remove_props, reversed,
    },
    compose::{call_with, log, log_to, tap, Apply},
    one_or_many::{ensure_vec, OneOrMany},
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collection::{Collection, Key};
    pub use crate::combinators::{
        feach_with_key, fflat_map_with_key, fmap_values_with_key, fmap_with_key, interleave,
        map_to_object, remove_props, reversed,
    };
    pub use crate::compose::{call_with, log, log_to, tap, Apply};
    pub use crate::one_or_many::{ensure_vec, OneOrMany};
}
