use super::IntoEnumerator;
use crate::{Enumerator, exit::Flow};

/// Any re-iterable value, iterated afresh on every run.
#[derive(Debug, Clone)]
pub struct FromIter<I>(I);

/// Create a sequence from a clonable [`IntoIterator`].
///
/// ```rust
/// use linq::prelude::*;
///
/// let seq = from_iter((1..=3).map(|n| n * n));
/// assert_eq!(seq.to_vec().unwrap(), vec![1, 4, 9]);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter(iter)
}

impl<I> Enumerator for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(I::Item) -> Flow,
    {
        for item in self.0.clone() {
            emit(item)?;
        }
        Ok(())
    }
}

impl<I> IntoEnumerator for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type IntoEnum = Self;

    fn into_enumerator(self) -> Self {
        self
    }
}
