//! Commonly used imports
//!
//! Use `use linq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Enumerator, Error, Exit, Flow, Interrupt, IntoEnumerator};

// Most common constructors
pub use crate::build::{empty, from_fn, ints_from, range, repeat};
pub use crate::source::{from, from_iter, from_reader};

// Composition
pub use crate::compose::{
    concat, filter, flat_map, map, skip, skip_while, take, take_while,
};
pub use crate::concurrent::{ZipConfig, zip};

// Execution
pub use crate::collect::{to_list, to_vec};
pub use crate::exit::loop_with_exit;
pub use crate::fold::{fold, fold_with_exit};
