//! The push-sequence trait.
//!
//! An [`Enumerator`] is not a cursor. It is a producer that, when run, calls
//! the consumer once per element in order and then returns. It keeps no
//! position between runs, so running it again replays it from the start.
//!
//! # Examples
//!
//! ```rust
//! use linq::prelude::*;
//!
//! let evens = range(1, 10).filter(|n| n % 2 == 0).map(|n| n * 10);
//! assert_eq!(evens.to_vec().unwrap(), vec![20, 40, 60, 80, 100]);
//! // Running again replays the sequence.
//! assert_eq!(evens.to_vec().unwrap().len(), 5);
//! ```

use std::collections::LinkedList;

use either::Either;

use crate::{
    Error,
    collect::{to_list, to_vec},
    compose::{
        Concat, Filter, FlatMap, Map, Skip, SkipWhile, Take, TakeWhile, concat, filter, flat_map,
        map, skip, skip_while, take, take_while,
    },
    concurrent::{Zip, ZipConfig, zip, zip_with_config},
    exit::{Exit, Flow, Interrupt, finish, loop_with_exit},
    fold::{FoldExit, fold, fold_with_exit},
};

/// A lazy sequence that pushes its elements into a consumer.
///
/// ```rust
/// use linq::prelude::*;
///
/// let mut out = Vec::new();
/// range(7, 3).for_each(|n| out.push(n)).unwrap();
/// assert_eq!(out, vec![7, 8, 9]);
/// ```
pub trait Enumerator {
    /// Type of the elements pushed to the consumer.
    type Item;

    /// Call `emit` once per element, in order.
    ///
    /// Stops as soon as `emit` returns an [`Interrupt`] and hands that interrupt
    /// back unchanged.
    fn run<Y>(&self, emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow;

    /// Run with a body that can stop this run early. See [`loop_with_exit`].
    fn loop_with_exit<F>(&self, body: F) -> Flow
    where
        Self: Sized,
        F: FnMut(Self::Item, &Exit) -> Flow,
    {
        loop_with_exit(self, body)
    }

    /// Drive the whole sequence with a fallible consumer.
    fn try_for_each<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut(Self::Item) -> Flow,
    {
        finish(self.run(f))
    }

    /// Drive the whole sequence with a plain consumer.
    fn for_each<F>(&self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(Self::Item),
    {
        self.try_for_each(|item| {
            f(item);
            Ok(())
        })
    }

    /// Apply `f` to every element.
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        map(f, self)
    }

    /// Keep only elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        filter(predicate, self)
    }

    /// Replace every element with the sequence `f` builds from it.
    fn flat_map<S, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        S: Enumerator,
        F: Fn(Self::Item) -> S,
    {
        flat_map(f, self)
    }

    /// Yield at most the first `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(n, self)
    }

    /// Yield elements until `predicate` first fails.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        take_while(predicate, self)
    }

    /// Discard the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(n, self)
    }

    /// Discard the leading run of elements matching `predicate`.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        skip_while(predicate, self)
    }

    /// Yield every element of `self`, then every element of `other`.
    fn concat<E>(self, other: E) -> Concat<Self, E>
    where
        Self: Sized,
        E: Enumerator<Item = Self::Item>,
    {
        concat(self, other)
    }

    /// Pair elements positionally with `other` and combine them with `f`.
    ///
    /// `other` is driven on a worker thread for the duration of each run.
    fn zip<B, R, F>(self, other: B, f: F) -> Zip<Self, B, F>
    where
        Self: Sized,
        B: Enumerator + Sync,
        B::Item: Send,
        F: Fn(Self::Item, B::Item) -> R,
    {
        zip(f, self, other)
    }

    /// [`zip`](Enumerator::zip) with an explicit worker configuration.
    fn zip_with_config<B, R, F>(self, other: B, f: F, config: ZipConfig) -> Zip<Self, B, F>
    where
        Self: Sized,
        B: Enumerator + Sync,
        B::Item: Send,
        F: Fn(Self::Item, B::Item) -> R,
    {
        zip_with_config(f, self, other, config)
    }

    /// Left fold over the whole sequence.
    fn fold<S, F>(&self, seed: S, f: F) -> Result<S, Error>
    where
        Self: Sized,
        F: FnMut(S, Self::Item) -> S,
    {
        fold(self, seed, f)
    }

    /// Left fold whose step may stop early with a final value.
    fn fold_with_exit<S, F>(&self, seed: S, f: F) -> Result<S, Error>
    where
        Self: Sized,
        F: FnMut(S, Self::Item, &FoldExit<'_, S>) -> Result<S, Interrupt>,
    {
        fold_with_exit(self, seed, f)
    }

    /// Collect every element into a `Vec`.
    fn to_vec(&self) -> Result<Vec<Self::Item>, Error>
    where
        Self: Sized,
    {
        to_vec(self)
    }

    /// Collect every element into a `LinkedList`.
    fn to_list(&self) -> Result<LinkedList<Self::Item>, Error>
    where
        Self: Sized,
    {
        to_list(self)
    }

    /// Erase the concrete type of this sequence.
    fn boxed<'a>(self) -> BoxedEnumerator<'a, Self::Item>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedEnumerator(Box::new(self))
    }
}

impl<E> Enumerator for &E
where
    E: Enumerator,
{
    type Item = E::Item;

    fn run<Y>(&self, emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        (**self).run(emit)
    }
}

impl<E> Enumerator for Box<E>
where
    E: Enumerator,
{
    type Item = E::Item;

    fn run<Y>(&self, emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        (**self).run(emit)
    }
}

/// `None` is the empty sequence.
///
/// `Option`'s own `map`, `filter`, `take` and `zip` shadow the combinators of
/// the same name, so wrap an `Option` with the free functions instead.
///
/// ```rust
/// use linq::prelude::*;
///
/// let doubled = map(|n: i64| n * 2, Some(range(1, 3)));
/// assert_eq!(doubled.to_vec().unwrap(), vec![2, 4, 6]);
/// ```
impl<E> Enumerator for Option<E>
where
    E: Enumerator,
{
    type Item = E::Item;

    fn run<Y>(&self, emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        match self {
            Some(seq) => seq.run(emit),
            None => Ok(()),
        }
    }
}

impl<L, R> Enumerator for Either<L, R>
where
    L: Enumerator,
    R: Enumerator<Item = L::Item>,
{
    type Item = L::Item;

    fn run<Y>(&self, emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        match self {
            Either::Left(l) => l.run(emit),
            Either::Right(r) => r.run(emit),
        }
    }
}

trait DynEnumerator<T> {
    fn run_dyn(&self, emit: &mut dyn FnMut(T) -> Flow) -> Flow;
}

impl<E> DynEnumerator<E::Item> for E
where
    E: Enumerator,
{
    fn run_dyn(&self, emit: &mut dyn FnMut(E::Item) -> Flow) -> Flow {
        self.run(emit)
    }
}

/// Type-erased sequence created by [`Enumerator::boxed`].
pub struct BoxedEnumerator<'a, T>(Box<dyn DynEnumerator<T> + Send + Sync + 'a>);

impl<T> Enumerator for BoxedEnumerator<'_, T> {
    type Item = T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        self.0.run_dyn(&mut emit)
    }
}
