use crate::{Enumerator, exit::Flow};

/// Passes through only the elements matching a predicate.
pub struct Filter<E, P> {
    predicate: P,
    seq: E,
}

/// Create a sequence of the elements of `seq` for which `predicate` holds.
///
/// ```rust
/// use linq::prelude::*;
///
/// let evens = filter(|e: &i64| e % 2 == 0, range(1, 10));
/// assert_eq!(evens.to_vec().unwrap(), vec![2, 4, 6, 8, 10]);
/// ```
pub fn filter<E, P>(predicate: P, seq: E) -> Filter<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    Filter { predicate, seq }
}

impl<E, P> Enumerator for Filter<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        self.seq.run(|item| {
            if (self.predicate)(&item) {
                emit(item)
            } else {
                Ok(())
            }
        })
    }
}
