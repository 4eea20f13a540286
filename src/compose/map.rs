//! Transforming the elements of a sequence.
//!
//! This module provides [`Map`] and [`FlatMap`], the LINQ `Select` and
//! `SelectMany` combinators.

use crate::{Enumerator, exit::Flow};

/// Applies a function to every element of the wrapped sequence.
///
/// Preserves order and cardinality.
pub struct Map<E, F> {
    f: F,
    seq: E,
}

/// Create a sequence yielding `f(e)` for every element `e` of `seq`.
///
/// # Examples
///
/// ```
/// use linq::prelude::*;
///
/// let squares = map(|x: i64| x * x, range(1, 4));
/// assert_eq!(squares.to_vec().unwrap(), vec![1, 4, 9, 16]);
/// ```
pub fn map<E, R, F>(f: F, seq: E) -> Map<E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> R,
{
    Map { f, seq }
}

impl<E, R, F> Enumerator for Map<E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> R,
{
    type Item = R;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(R) -> Flow,
    {
        self.seq.run(|item| emit((self.f)(item)))
    }
}

/// Replaces every element with the sequence a function builds from it.
///
/// Each sub-sequence is drained before the next upstream element is pulled.
pub struct FlatMap<E, F> {
    f: F,
    seq: E,
}

/// Create a sequence that flattens `f(e)` for every element `e` of `seq`.
///
/// # Examples
///
/// ```
/// use linq::prelude::*;
///
/// let words = from(vec!["ab", "c"]);
/// let letters = flat_map(|w| from(w), words);
/// assert_eq!(letters.to_vec().unwrap(), vec!['a', 'b', 'c']);
/// ```
pub fn flat_map<E, S, F>(f: F, seq: E) -> FlatMap<E, F>
where
    E: Enumerator,
    S: Enumerator,
    F: Fn(E::Item) -> S,
{
    FlatMap { f, seq }
}

impl<E, S, F> Enumerator for FlatMap<E, F>
where
    E: Enumerator,
    S: Enumerator,
    F: Fn(E::Item) -> S,
{
    type Item = S::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(S::Item) -> Flow,
    {
        self.seq.run(|item| (self.f)(item).run(&mut emit))
    }
}
