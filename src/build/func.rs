use std::marker::PhantomData;

use crate::{Enumerator, exit::Flow};

/// A sequence written directly as a closure over its consumer.
pub struct FromFn<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

/// Create a sequence from a closure that pushes elements into `emit`.
///
/// The closure must forward the [`Flow`] returned by `emit` (usually with `?`)
/// so that early exits and failures stop it.
///
/// Annotate the `emit` parameter with a concrete item type. A borrowed item
/// type needs an explicit lifetime such as `&'static str`: a bare `&str`
/// makes the closure generic over every lifetime and it no longer matches
/// `FnMut(T)`.
///
/// ```rust
/// use linq::prelude::*;
///
/// let seq = from_fn(|emit: &mut dyn FnMut(&'static str) -> Flow| {
///     emit("a")?;
///     emit("b")?;
///     emit("c")
/// });
/// assert_eq!(seq.to_vec().unwrap(), vec!["a", "b", "c"]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> Flow) -> Flow,
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Enumerator for FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> Flow) -> Flow,
{
    type Item = T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(T) -> Flow,
    {
        (self.f)(&mut emit)
    }
}
