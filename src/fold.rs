//! Folding a sequence into a single value.
//!
//! [`fold`] is a plain left fold. [`fold_with_exit`] hands its step a
//! [`FoldExit`] that ends the fold with a chosen value and stops pulling.

use std::cell::Cell;

use crate::{
    Enumerator, Error,
    exit::{Exit, Interrupt, finish},
};

/// Left fold: `f(f(...f(seed, e1)...), eN)`.
///
/// Never returns for an infinite sequence.
///
/// ```rust
/// use linq::prelude::*;
///
/// let product = fold(&range(1, 5), 100, |a, b| a * b).unwrap();
/// assert_eq!(product, 12000);
/// ```
pub fn fold<E, S, F>(seq: &E, seed: S, mut f: F) -> Result<S, Error>
where
    E: Enumerator,
    F: FnMut(S, E::Item) -> S,
{
    let mut acc = Some(seed);
    finish(seq.run(|item| {
        acc = acc.take().map(|current| f(current, item));
        Ok(())
    }))?;
    Ok(settled(acc))
}

/// Early-exit capability handed to the step of [`fold_with_exit`].
pub struct FoldExit<'a, S> {
    exit: &'a Exit,
    value: &'a Cell<Option<S>>,
}

impl<S> FoldExit<'_, S> {
    /// End the fold with `value`; return this from the step.
    pub fn exit<R>(&self, value: S) -> Result<R, Interrupt> {
        self.value.set(Some(value));
        self.exit.exit()
    }
}

/// Left fold whose step may end the fold early.
///
/// Calling `exit(value)` makes `value` the result and stops the sequence. If
/// the step never exits this behaves exactly like [`fold`].
///
/// ```rust
/// use linq::prelude::*;
///
/// let seq = from(vec![Some(1), Some(2), Some(3), None, Some(4), Some(5)]);
/// let x = fold_with_exit(&seq, 100, |acc, item, exit| match item {
///     Some(n) => Ok(acc * n),
///     None => exit.exit(-acc),
/// })
/// .unwrap();
/// assert_eq!(x, -600);
/// ```
pub fn fold_with_exit<E, S, F>(seq: &E, seed: S, mut f: F) -> Result<S, Error>
where
    E: Enumerator,
    F: FnMut(S, E::Item, &FoldExit<'_, S>) -> Result<S, Interrupt>,
{
    let exited = Cell::new(None);
    let mut acc = Some(seed);
    let flow = seq.loop_with_exit(|item, exit| {
        let Some(current) = acc.take() else {
            return Ok(());
        };
        let handle = FoldExit {
            exit,
            value: &exited,
        };
        acc = Some(f(current, item, &handle)?);
        Ok(())
    });
    finish(flow)?;
    Ok(exited.into_inner().unwrap_or_else(|| settled(acc)))
}

/// Final accumulator of a fold that ran to completion.
///
/// A step only leaves the slot empty when it fails or panics, and both end
/// the fold before this is reached.
fn settled<S>(acc: Option<S>) -> S {
    match acc {
        Some(value) => value,
        None => unreachable!("fold accumulator is restored after every step"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_fn, ints_from, range};
    use crate::exit::Flow;
    use crate::source::from;

    #[derive(Debug, Clone)]
    enum Entry {
        Num(i64),
        Poison,
    }

    #[test]
    fn test_fold_multiplies_seed() {
        assert_eq!(range(1, 5).fold(100, |a, b| a * b).unwrap(), 12000);
    }

    #[test]
    fn test_fold_of_empty_is_seed() {
        assert_eq!(empty::<i64>().fold(7, |a, b| a + b).unwrap(), 7);
    }

    #[test]
    fn test_fold_builds_owned_accumulator() {
        let joined = range(1, 3).fold(String::new(), |mut s, n| {
            s.push_str(&n.to_string());
            s
        });
        assert_eq!(joined.unwrap(), "123");
    }

    #[test]
    fn test_fold_with_exit_stops_at_sentinel() {
        let seq = from(vec![
            Entry::Num(1),
            Entry::Num(2),
            Entry::Num(3),
            Entry::Poison,
            Entry::Num(4),
            Entry::Num(5),
        ]);
        let x = seq.fold_with_exit(100, |acc, item, exit| match item {
            Entry::Num(n) => Ok(acc * n),
            Entry::Poison => exit.exit(-acc),
        });
        assert_eq!(x.unwrap(), -600);
    }

    #[test]
    fn test_fold_with_exit_without_exit_matches_fold() {
        let seq = range(1, 5);
        let plain = seq.fold(100, |a, b| a * b).unwrap();
        let with_exit = seq.fold_with_exit(100, |a, b, _| Ok(a * b)).unwrap();
        assert_eq!(plain, with_exit);
    }

    #[test]
    fn test_fold_with_exit_terminates_infinite_input() {
        let sum = ints_from(1).fold_with_exit(0, |acc, n, exit| {
            if acc + n > 10 { exit.exit(acc) } else { Ok(acc + n) }
        });
        assert_eq!(sum.unwrap(), 10);
    }

    #[test]
    fn test_fold_with_exit_stops_pulling() {
        let pulled = std::cell::Cell::new(0);
        let seq = from_fn(|emit: &mut dyn FnMut(i64) -> Flow| {
            for n in 0..100 {
                pulled.set(pulled.get() + 1);
                emit(n)?;
            }
            Ok(())
        });
        let x = seq.fold_with_exit(0, |_, n, exit| if n == 3 { exit.exit(-1) } else { Ok(n) });
        assert_eq!(x.unwrap(), -1);
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_fold_reports_step_failure() {
        let err = range(1, 5)
            .fold_with_exit(0, |acc, n, _| {
                if n == 3 {
                    Err(Interrupt::fail("bad step"))
                } else {
                    Ok(acc + n)
                }
            })
            .unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }

    #[test]
    fn test_fold_reports_source_failure() {
        let seq = from_fn(|emit: &mut dyn FnMut(i64) -> Flow| {
            emit(1)?;
            emit(2)?;
            Err(Interrupt::fail("source broke"))
        });
        let err = seq.fold_with_exit(0, |acc, n, _| Ok(acc + n)).unwrap_err();
        assert_eq!(err.to_string(), "source failed: source broke");
        assert!(seq.fold(0, |acc, n| acc + n).is_err());
    }
}
