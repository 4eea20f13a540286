//! # Linq: Lazy Push Sequences
//!
//! Sequences are producers, not containers: an [`Enumerator`] pushes each of
//! its elements into a consumer when it runs, and combinators wrap one
//! producer in another without ever buffering elements.
//!
//! ## Core Types
//!
//! - **[`Enumerator`]**: a sequence that drives a consumer callback
//! - **[`Flow`]** / **[`Interrupt`]**: the consumer's answer, either "continue",
//!   a non-local exit, or a failure
//! - **[`loop_with_exit`]**: run a sequence with a body that can stop it early
//!
//! ## Example
//!
//! ```
//! use linq::prelude::*;
//!
//! let fizzbuzz = ints_from(1).map(|i| match (i % 3, i % 5) {
//!     (0, 0) => "FizzBuzz".to_string(),
//!     (0, _) => "Fizz".to_string(),
//!     (_, 0) => "Buzz".to_string(),
//!     _ => i.to_string(),
//! });
//!
//! let first = fizzbuzz.take(15).to_vec().unwrap();
//! assert_eq!(first[2], "Fizz");
//! assert_eq!(first[14], "FizzBuzz");
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`range(start, count)`](range), [`repeat(value, count)`](repeat),
//!   [`ints_from(n)`](ints_from), [`empty()`](empty), [`from_fn(f)`](from_fn)
//! - [`from(source)`](from) for vectors, slices, lists, strings and channels,
//!   [`from_reader`] for lines of text, [`from_iter`] for re-iterable values
//!
//! **Combining:**
//! - [`map`], [`filter`], [`flat_map`], [`take`], [`take_while`], [`skip`],
//!   [`skip_while`], [`concat`], [`zip`]
//!
//! **Consuming:**
//! - [`fold`], [`fold_with_exit`], [`to_vec`], [`to_list`]

pub mod build;
pub mod collect;
pub mod compose;
pub mod concurrent;
mod enumerator;
mod error;
mod exit;
pub mod fold;
pub mod prelude;
pub mod source;

#[cfg(test)]
mod proptests;

pub use build::*;
pub use collect::*;
pub use compose::*;
pub use concurrent::*;
pub use enumerator::*;
pub use error::*;
pub use exit::*;
pub use fold::*;
pub use source::*;
