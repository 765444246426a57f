//! Pipeline plumbing: side-effect tapping, diagnostic logging, and
//! argument-first application.

use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// Wrap a callback so it runs for its side effect while the value flows
/// through unchanged.
///
/// The callback's return value is discarded. If the callback panics, the
/// panic propagates after the side effect has already been observed.
///
/// ```
/// use keywise::tap;
///
/// let mut seen = Vec::new();
/// let value = tap(|v: &i32| seen.push(*v))(7);
/// assert_eq!(value, 7);
/// assert_eq!(seen, vec![7]);
/// ```
pub fn tap<T, R, F>(mut callback: F) -> impl FnMut(T) -> T
where
    F: FnMut(&T) -> R,
{
    move |value| {
        callback(&value);
        value
    }
}

/// A [`tap`] that writes one line per invocation to standard error,
/// formatted as the single-entry JSON mapping `{"<key>":<value>}`.
pub fn log<T>(key: impl Into<String>) -> impl FnMut(T) -> T
where
    T: Serialize,
{
    let key = key.into();
    tap(move |value: &T| {
        let _ = writeln!(io::stderr(), "{}", render_entry(&key, value));
    })
}

/// Like [`log`], but writes to the given sink instead of standard error.
///
/// Write errors on the diagnostic path are swallowed; logging must never
/// alter data flow.
pub fn log_to<T, W>(key: impl Into<String>, mut sink: W) -> impl FnMut(T) -> T
where
    T: Serialize,
    W: Write,
{
    let key = key.into();
    tap(move |value: &T| {
        let _ = writeln!(sink, "{}", render_entry(&key, value));
    })
}

// Unserialisable values degrade to JSON null rather than failing the
// pipeline.
fn render_entry<T: Serialize>(key: &str, value: &T) -> String {
    let mut entry = serde_json::Map::with_capacity(1);
    entry.insert(
        key.to_owned(),
        serde_json::to_value(value).unwrap_or(Value::Null),
    );
    Value::Object(entry).to_string()
}

/// Tuples of arguments that can be applied to a function of matching arity.
pub trait Apply<F> {
    /// The function's return type.
    type Output;

    /// Call `f` with this tuple spread as positional arguments.
    fn apply(self, f: F) -> Self::Output;
}

macro_rules! impl_apply {
    ($(($ty:ident, $var:ident)),*) => {
        impl<Fun, Ret, $($ty),*> Apply<Fun> for ($($ty,)*)
        where
            Fun: FnOnce($($ty),*) -> Ret,
        {
            type Output = Ret;

            fn apply(self, f: Fun) -> Ret {
                let ($($var,)*) = self;
                f($($var),*)
            }
        }
    };
}

impl_apply!();
impl_apply!((A, a));
impl_apply!((A, a), (B, b));
impl_apply!((A, a), (B, b), (C, c));
impl_apply!((A, a), (B, b), (C, c), (D, d));
impl_apply!((A, a), (B, b), (C, c), (D, d), (E, e));

/// Fix a function's arguments first and supply the function later.
///
/// Arguments are given as a tuple (note the trailing comma for a single
/// argument) and spread positionally when the function arrives.
///
/// ```
/// use keywise::call_with;
///
/// assert_eq!(call_with((1, 2))(|a, b| a + b), 3);
/// assert_eq!(call_with((5,))(|x: i32| x * 2), 10);
/// ```
pub fn call_with<Args, F>(args: Args) -> impl FnOnce(F) -> Args::Output
where
    Args: Apply<F>,
{
    move |f| args.apply(f)
}
