use crate::{Enumerator, exit::Flow};

/// Discards the first `n` elements of the wrapped sequence.
pub struct Skip<E> {
    n: usize,
    seq: E,
}

/// Create a sequence of `seq` without its first `n` elements.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(skip(3, range(1, 6)).to_vec().unwrap(), vec![4, 5, 6]);
/// ```
pub fn skip<E>(n: usize, seq: E) -> Skip<E>
where
    E: Enumerator,
{
    Skip { n, seq }
}

impl<E> Enumerator for Skip<E>
where
    E: Enumerator,
{
    type Item = E::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        let mut skipped = 0;
        self.seq.run(|item| {
            if skipped < self.n {
                skipped += 1;
                Ok(())
            } else {
                emit(item)
            }
        })
    }
}

/// Discards the leading run of elements matching a predicate.
pub struct SkipWhile<E, P> {
    predicate: P,
    seq: E,
}

/// Create a sequence of `seq` starting at the first element failing `predicate`.
///
/// Once an element has been accepted the predicate is not consulted again.
///
/// ```rust
/// use linq::prelude::*;
///
/// let seq = skip_while(|e: &i64| *e < 4, range(1, 6));
/// assert_eq!(seq.to_vec().unwrap(), vec![4, 5, 6]);
/// ```
pub fn skip_while<E, P>(predicate: P, seq: E) -> SkipWhile<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    SkipWhile { predicate, seq }
}

impl<E, P> Enumerator for SkipWhile<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        let mut at_head = true;
        self.seq.run(|item| {
            if at_head {
                if (self.predicate)(&item) {
                    return Ok(());
                }
                at_head = false;
            }
            emit(item)
        })
    }
}
