//! Turning external data into push sequences
//!
//! Each source kind implements [`IntoEnumerator`] once, so the adapter is
//! chosen at compile time. [`from`] is the common entry point; [`from_reader`]
//! and [`from_iter`] cover sources that need an explicit constructor.

mod channel;
mod items;
mod iter;
mod reader;
mod text;

use crate::Enumerator;

pub use channel::Received;
pub use items::{Items, ListItems, SliceItems};
pub use iter::{FromIter, from_iter};
pub use reader::{Lines, from_reader};
pub use text::Chars;

/// A data source that can produce a push sequence of its elements.
pub trait IntoEnumerator {
    /// Element type of the produced sequence.
    type Item;
    /// The produced sequence.
    type IntoEnum: Enumerator<Item = Self::Item>;

    /// Convert into a push sequence.
    fn into_enumerator(self) -> Self::IntoEnum;
}

/// Create a push sequence over `source`.
///
/// ```rust
/// use linq::prelude::*;
///
/// assert_eq!(from(vec![2, 7, 1, 8]).to_vec().unwrap(), vec![2, 7, 1, 8]);
/// assert_eq!(from("2718").to_vec().unwrap(), vec!['2', '7', '1', '8']);
/// ```
pub fn from<S>(source: S) -> S::IntoEnum
where
    S: IntoEnumerator,
{
    source.into_enumerator()
}
