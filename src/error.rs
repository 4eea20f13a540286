//! Failures that terminate a pipeline.

use std::io;

/// Error returned to the caller that drove a sequence.
///
/// A non-local exit is never an `Error`; it only becomes one when the exit
/// escapes every loop that could have claimed it ([`Error::StrayExit`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from an I/O-backed source failed.
    #[error("failed to read from source: {0}")]
    Read(#[from] io::Error),
    /// A source or consumer reported a failure of its own.
    #[error("source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The zip worker thread could not be started.
    #[error("failed to spawn zip worker: {0}")]
    SpawnWorker(#[source] io::Error),
    /// An exit signal reached the top of a pipeline without meeting its loop.
    #[error("exit signal escaped the loop that minted it")]
    StrayExit,
}

impl Error {
    /// Wrap any error as a [`Error::Source`] failure.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Source(err.into())
    }
}
