use crate::{Enumerator, exit::Flow};

/// Runs the first sequence to completion, then the second.
///
/// Created via [`concat`] or [`Enumerator::concat`].
pub struct Concat<E1, E2>(E1, E2);

/// Create a sequence yielding every element of `first`, then every element of `second`.
///
/// If `first` never ends, `second` is never run.
///
/// ```rust
/// use linq::prelude::*;
///
/// let seq = concat(range(7, 5), range(101, 3));
/// assert_eq!(seq.to_vec().unwrap(), vec![7, 8, 9, 10, 11, 101, 102, 103]);
/// ```
pub fn concat<E1, E2>(first: E1, second: E2) -> Concat<E1, E2>
where
    E1: Enumerator,
    E2: Enumerator<Item = E1::Item>,
{
    Concat(first, second)
}

impl<E1, E2> Enumerator for Concat<E1, E2>
where
    E1: Enumerator,
    E2: Enumerator<Item = E1::Item>,
{
    type Item = E1::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(Self::Item) -> Flow,
    {
        self.0.run(&mut emit)?;
        self.1.run(emit)
    }
}
