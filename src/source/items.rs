use std::collections::{LinkedList, VecDeque};

use super::IntoEnumerator;
use crate::{Enumerator, exit::Flow};

/// Owned elements, yielded as clones so the sequence can be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Items<T>(Vec<T>);

impl<T: Clone> Enumerator for Items<T> {
    type Item = T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(T) -> Flow,
    {
        for item in &self.0 {
            emit(item.clone())?;
        }
        Ok(())
    }
}

impl<T: Clone> IntoEnumerator for Vec<T> {
    type Item = T;
    type IntoEnum = Items<T>;

    fn into_enumerator(self) -> Items<T> {
        Items(self)
    }
}

impl<T: Clone, const N: usize> IntoEnumerator for [T; N] {
    type Item = T;
    type IntoEnum = Items<T>;

    fn into_enumerator(self) -> Items<T> {
        Items(self.into())
    }
}

impl<T: Clone> IntoEnumerator for VecDeque<T> {
    type Item = T;
    type IntoEnum = Items<T>;

    fn into_enumerator(self) -> Items<T> {
        Items(self.into())
    }
}

/// Borrowed elements, yielded by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceItems<'a, T>(&'a [T]);

impl<'a, T> Enumerator for SliceItems<'a, T> {
    type Item = &'a T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(&'a T) -> Flow,
    {
        for item in self.0 {
            emit(item)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoEnumerator for &'a [T] {
    type Item = &'a T;
    type IntoEnum = SliceItems<'a, T>;

    fn into_enumerator(self) -> SliceItems<'a, T> {
        SliceItems(self)
    }
}

/// Elements of a linked list, front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItems<T>(LinkedList<T>);

impl<T: Clone> Enumerator for ListItems<T> {
    type Item = T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(T) -> Flow,
    {
        for item in &self.0 {
            emit(item.clone())?;
        }
        Ok(())
    }
}

impl<T: Clone> IntoEnumerator for LinkedList<T> {
    type Item = T;
    type IntoEnum = ListItems<T>;

    fn into_enumerator(self) -> ListItems<T> {
        ListItems(self)
    }
}
