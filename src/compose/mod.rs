//! Combining sequences into new sequences
//!
//! Every combinator here is lazy: building one pulls nothing, and running it
//! pulls upstream exactly as fast as the consumer accepts elements.

mod chain;
mod filter;
mod map;
mod skip;
mod take;

// Re-export composition operations
pub use chain::{Concat, concat};
pub use filter::{Filter, filter};
pub use map::{FlatMap, Map, flat_map, map};
pub use skip::{Skip, SkipWhile, skip, skip_while};
pub use take::{Take, TakeWhile, take, take_while};
