//! Independent producers.
//!
//! [`range`], [`repeat`], [`ints_from`] and [`empty`] depend on nothing but the
//! push protocol itself.

use std::marker::PhantomData;

use crate::{Enumerator, exit::Flow};

/// Counts from `start` up to `start + count - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    count: i64,
}

/// Create a sequence counting `count` integers from `start`.
///
/// A non-positive `count` yields nothing. Counting stops at `i64::MAX`.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(range(7, 3).to_vec().unwrap(), vec![7, 8, 9]);
/// assert!(range(7, -1).to_vec().unwrap().is_empty());
/// ```
pub fn range(start: i64, count: i64) -> Range {
    Range { start, count }
}

impl Enumerator for Range {
    type Item = i64;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(i64) -> Flow,
    {
        for offset in 0..self.count.max(0) {
            let Some(value) = self.start.checked_add(offset) else {
                break;
            };
            emit(value)?;
        }
        Ok(())
    }
}

/// Yields one value a fixed number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

/// Create a sequence yielding `value` exactly `count` times.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(repeat("toi", 3).to_vec().unwrap(), vec!["toi", "toi", "toi"]);
/// ```
pub fn repeat<T: Clone>(value: T, count: usize) -> Repeat<T> {
    Repeat { value, count }
}

impl<T: Clone> Enumerator for Repeat<T> {
    type Item = T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(T) -> Flow,
    {
        for _ in 0..self.count {
            emit(self.value.clone())?;
        }
        Ok(())
    }
}

/// Counts upward from a starting integer without end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntsFrom {
    start: i64,
}

/// Create the sequence `n, n + 1, n + 2, ...`.
///
/// Only finishes once it has yielded `i64::MAX`, so in practice it must be
/// paired with an early-stopping combinator such as [`take`](crate::take).
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(ints_from(1).take(5).to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn ints_from(n: i64) -> IntsFrom {
    IntsFrom { start: n }
}

impl Enumerator for IntsFrom {
    type Item = i64;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(i64) -> Flow,
    {
        let mut next = Some(self.start);
        while let Some(value) = next {
            emit(value)?;
            next = value.checked_add(1);
        }
        Ok(())
    }
}

/// The sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create an empty sequence of any element type.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert!(empty::<i32>().to_vec().unwrap().is_empty());
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Enumerator for Empty<T> {
    type Item = T;

    fn run<Y>(&self, _emit: Y) -> Flow
    where
        Y: FnMut(T) -> Flow,
    {
        Ok(())
    }
}
