//! Eager materialization.
//!
//! The only operations that force a whole sequence into memory. Both diverge
//! on infinite input.

use std::collections::LinkedList;

use crate::{Enumerator, Error, exit::finish};

/// Collect every element of `seq` into a `Vec`, in order.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(to_vec(&range(7, 3)).unwrap(), vec![7, 8, 9]);
/// ```
pub fn to_vec<E>(seq: &E) -> Result<Vec<E::Item>, Error>
where
    E: Enumerator,
{
    let mut out = Vec::new();
    finish(seq.run(|item| {
        out.push(item);
        Ok(())
    }))?;
    Ok(out)
}

/// Collect every element of `seq` into a `LinkedList`, in order.
pub fn to_list<E>(seq: &E) -> Result<LinkedList<E::Item>, Error>
where
    E: Enumerator,
{
    let mut out = LinkedList::new();
    finish(seq.run(|item| {
        out.push_back(item);
        Ok(())
    }))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, range};
    use crate::exit::{Flow, Interrupt};

    #[test]
    fn test_to_list_keeps_order() {
        let list = range(7, 3).to_list().unwrap();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn test_to_vec_of_literal_sequence() {
        let seq = from_fn(|emit: &mut dyn FnMut(&'static str) -> Flow| {
            emit("a")?;
            emit("b")?;
            emit("c")
        });
        assert_eq!(to_vec(&seq).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collect_discards_partial_result_on_failure() {
        let seq = from_fn(|emit: &mut dyn FnMut(i32) -> Flow| {
            emit(1)?;
            emit(2)?;
            Err(Interrupt::fail("cut"))
        });
        assert!(seq.to_vec().is_err());
        assert!(seq.to_list().is_err());
    }
}
