//! Pairing sequences driven by independent control flows
//!
//! This module provides [`Zip`], the one combinator that runs part of a
//! pipeline on a worker thread.

mod zip;

// Re-export concurrent operations
pub use zip::{Zip, ZipConfig, zip, zip_with_config};
