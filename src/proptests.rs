//! Property tests over randomly generated finite sequences.

use std::cell::Cell;

use proptest::prelude::*;

use crate::prelude::*;

fn counted<'a>(items: &'a [i32], pulls: &'a Cell<usize>) -> impl Enumerator<Item = i32> + 'a {
    from_fn(move |emit: &mut dyn FnMut(i32) -> Flow| {
        for item in items {
            pulls.set(pulls.get() + 1);
            emit(*item)?;
        }
        Ok(())
    })
}

proptest! {
    #[test]
    fn test_map_matches_elementwise(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mapped = from(items.clone()).map(|n| n.wrapping_mul(3)).to_vec().unwrap();
        let expected: Vec<i32> = items.iter().map(|n| n.wrapping_mul(3)).collect();
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn test_take_pulls_at_most_n(items in prop::collection::vec(any::<i32>(), 0..32), n in 0usize..48) {
        let pulls = Cell::new(0);
        let taken = counted(&items, &pulls).take(n).to_vec().unwrap();
        prop_assert_eq!(taken.as_slice(), &items[..n.min(items.len())]);
        prop_assert_eq!(pulls.get(), n.min(items.len()));
    }

    #[test]
    fn test_concat_appends(
        a in prop::collection::vec(any::<i32>(), 0..32),
        b in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let joined = from(a.clone()).concat(from(b.clone())).to_vec().unwrap();
        let expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn test_zip_length_is_min(
        a in prop::collection::vec(any::<i16>(), 0..24),
        b in prop::collection::vec(any::<i16>(), 0..24),
    ) {
        let pairs = from(a.clone()).zip(from(b.clone()), |x, y| (x, y)).to_vec().unwrap();
        let expected: Vec<(i16, i16)> = a.iter().copied().zip(b.iter().copied()).collect();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn test_zip_under_take(
        a in prop::collection::vec(any::<i16>(), 0..24),
        b in prop::collection::vec(any::<i16>(), 0..24),
        n in 0usize..32,
    ) {
        let pairs = from(a.clone()).zip(from(b.clone()), |x, y| (x, y)).take(n).to_vec().unwrap();
        prop_assert_eq!(pairs.len(), n.min(a.len()).min(b.len()));
    }

    #[test]
    fn test_skip_while_head_fails_predicate(items in prop::collection::vec(-20i32..20, 0..32), bound in -20i32..20) {
        let pred = move |n: &i32| *n < bound;
        let rest = from(items.clone()).skip_while(pred).to_vec().unwrap();
        if let Some(first) = rest.first() {
            prop_assert!(!pred(first));
        }
        let skipped = items.iter().take_while(|n| pred(*n)).count();
        prop_assert_eq!(rest.as_slice(), &items[skipped..]);
    }

    #[test]
    fn test_skip_then_take_partitions(items in prop::collection::vec(any::<i32>(), 0..32), n in 0usize..40) {
        let head = from(items.clone()).take(n).to_vec().unwrap();
        let tail = from(items.clone()).skip(n).to_vec().unwrap();
        let mut whole = head;
        whole.extend(tail);
        prop_assert_eq!(whole, items);
    }

    #[test]
    fn test_fold_matches_iterator_fold(items in prop::collection::vec(-1000i64..1000, 0..32)) {
        let sum = from(items.clone()).fold(0i64, |acc, n| acc + n).unwrap();
        prop_assert_eq!(sum, items.iter().sum::<i64>());
    }
}
