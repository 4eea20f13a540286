//! Stopping a sequence early.
//!
//! [`Take`] and [`TakeWhile`] stop their upstream with a non-local exit, so no
//! element past the last accepted one is ever produced.

use crate::{Enumerator, exit::Flow};

/// Yields at most the first `n` elements of the wrapped sequence.
pub struct Take<E> {
    n: usize,
    seq: E,
}

/// Create a sequence of the first `n` elements of `seq`.
///
/// With `n == 0` the upstream is never run.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(take(3, range(1, 6)).to_vec().unwrap(), vec![1, 2, 3]);
/// assert_eq!(ints_from(-3).take(7).to_vec().unwrap(), vec![-3, -2, -1, 0, 1, 2, 3]);
/// ```
pub fn take<E>(n: usize, seq: E) -> Take<E>
where
    E: Enumerator,
{
    Take { n, seq }
}

impl<E> Enumerator for Take<E>
where
    E: Enumerator,
{
    type Item = E::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        if self.n == 0 {
            return Ok(());
        }
        let mut taken = 0;
        self.seq.loop_with_exit(|item, exit| {
            emit(item)?;
            taken += 1;
            if taken >= self.n { exit.exit() } else { Ok(()) }
        })
    }
}

/// Yields elements while a predicate holds.
pub struct TakeWhile<E, P> {
    predicate: P,
    seq: E,
}

/// Create a sequence of the leading elements of `seq` matching `predicate`.
///
/// The first failing element is dropped and nothing after it is pulled.
///
/// ```rust
/// use linq::prelude::*;
///
/// let seq = take_while(|e: &i64| *e < 4, range(1, 6));
/// assert_eq!(seq.to_vec().unwrap(), vec![1, 2, 3]);
/// ```
pub fn take_while<E, P>(predicate: P, seq: E) -> TakeWhile<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    TakeWhile { predicate, seq }
}

impl<E, P> Enumerator for TakeWhile<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        self.seq.loop_with_exit(|item, exit| {
            if (self.predicate)(&item) {
                emit(item)
            } else {
                exit.exit()
            }
        })
    }
}
