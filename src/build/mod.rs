//! Building sequences from scratch
//!
//! This module provides the generators and the closure adapter that every
//! other sequence is ultimately built on.

mod func;
mod generate;

// Re-export building blocks
pub use func::{FromFn, from_fn};
pub use generate::{Empty, IntsFrom, Range, Repeat, empty, ints_from, range, repeat};
