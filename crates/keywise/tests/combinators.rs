//! Integration tests exercising the full public surface through the prelude.

use indexmap::indexmap;
use keywise::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn ensure_vec_always_yields_a_vector() {
    assert_eq!(ensure_vec(1), vec![1]);
    assert_eq!(ensure_vec::<i32>(vec![1, 2, 3]), vec![1, 2, 3]);

    let wrapped = ensure_vec::<String>("solo");
    assert_eq!(ensure_vec::<String>(wrapped.clone()), wrapped);
}

#[test]
fn call_with_supplies_arguments_before_the_function() {
    assert_eq!(call_with((1, 2))(|a, b| a + b), 3);

    let concat = |prefix: &str, suffix: &str| format!("{prefix}{suffix}");
    assert_eq!(call_with(("fn", "al"))(concat), "fnal");
}

#[test]
fn key_aware_family_agrees_on_iteration_order() {
    let collection = Collection::from(indexmap! {
        "a".to_string() => 1,
        "b".to_string() => 2,
        "c".to_string() => 3,
    });

    let mapped = fmap_with_key(|value, key| format!("{key}{value}"))(&collection);
    assert_eq!(mapped, vec!["a1", "b2", "c3"]);

    let mut visited = Vec::new();
    feach_with_key(|_, key: &Key| visited.push(key.to_string()))(&collection);
    assert_eq!(visited, vec!["a", "b", "c"]);

    let flattened = fflat_map_with_key(|value, key: &Key| {
        if key.as_name() == Some("c") {
            Vec::new()
        } else {
            vec![format!("{key}{value}")]
        }
    })(&collection);
    assert_eq!(flattened, vec!["a1", "b2"]);
}

#[test]
fn fmap_values_with_key_round_trips_through_serde() {
    let collection = Collection::from(indexmap! {"a".to_string() => 1, "b".to_string() => 2});
    let shifted = fmap_values_with_key(|value: &i32, _| value + 10)(&collection);

    assert_eq!(
        serde_json::to_string(&shifted).unwrap(),
        r#"{"a":11,"b":12}"#
    );
}

#[test]
fn remove_props_composes_with_map_to_object() {
    let collection = Collection::from(indexmap! {"a".to_string() => 1, "b".to_string() => 2});
    let built = map_to_object(|value, key| (format!("{key}{value}"), *value))(&collection);
    let trimmed = remove_props("a1")(&built);

    assert_eq!(trimmed, indexmap! {"b2".to_string() => 2});
}

#[test]
fn interleave_matches_expected_shapes() {
    let divider = |_: &&str| "X";
    assert_eq!(
        interleave(divider)(&["a", "b", "c"]),
        vec!["a", "X", "b", "X", "c"]
    );

    let empty: Vec<&str> = Vec::new();
    assert_eq!(interleave(divider)(&empty), empty);
    assert_eq!(interleave(divider)(&["a"]), vec!["a"]);
}

#[test]
fn tap_side_effect_is_observed_before_a_panic_propagates() {
    let observed = AtomicBool::new(false);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        tap(|_: &i32| {
            observed.store(true, Ordering::SeqCst);
            panic!("callback failure");
        })(7)
    }));

    assert!(outcome.is_err());
    assert!(observed.load(Ordering::SeqCst));
}

#[test]
fn log_to_formats_values_as_single_entry_mappings() {
    let mut buffer = Vec::new();
    {
        let mut logger = log_to("scores", &mut buffer);
        let passed_through = logger(vec![1, 2]);
        assert_eq!(passed_through, vec![1, 2]);
    }

    assert_eq!(String::from_utf8(buffer).unwrap(), "{\"scores\":[1,2]}\n");
}
