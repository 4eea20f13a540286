//! Zipping two push sequences.
//!
//! Both sides of a zip can only be driven by running them, so the secondary
//! sequence runs on a scoped worker thread for the length of one run of the
//! [`Zip`]. The two threads alternate strictly:
//!
//! 1. the caller pulls the next element of the primary sequence,
//! 2. sends one request on a capacity-one channel,
//! 3. and blocks on a rendezvous channel for the worker's answer.
//!
//! The worker waits for a request before it starts the secondary sequence and
//! again inside its consumer after handing over each element, so the secondary
//! sequence is never pulled ahead of demand. Closing the request channel is the
//! stop signal. It is dropped on every exit path, and the scope joins the
//! worker before the run returns.

use std::{panic, thread};

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::{
    Enumerator, Error,
    exit::{Flow, Interrupt},
};

const DEFAULT_WORKER_NAME: &str = "linq-zip";

/// Worker thread settings for [`Zip`].
///
/// ```rust
/// use linq::prelude::*;
///
/// let config = ZipConfig::default().name("pairs").stack_size(256 * 1024);
/// let seq = range(1, 3).zip_with_config(range(10, 3), |a, b| a + b, config);
/// assert_eq!(seq.to_vec().unwrap(), vec![11, 13, 15]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipConfig {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl Default for ZipConfig {
    fn default() -> Self {
        Self {
            name: Some(DEFAULT_WORKER_NAME.to_string()),
            stack_size: None,
        }
    }
}

impl ZipConfig {
    /// Name given to the worker thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Leave the worker thread unnamed.
    pub fn unnamed(mut self) -> Self {
        self.name = None;
        self
    }

    /// Stack size of the worker thread, in bytes.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    fn builder(&self) -> thread::Builder {
        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }
        builder
    }
}

/// Pairs two sequences element by element.
///
/// Yields `min(|A|, |B|)` elements. Created via [`zip`] or [`Enumerator::zip`].
pub struct Zip<A, B, F> {
    f: F,
    first: A,
    second: B,
    config: ZipConfig,
}

/// Create a sequence of `f(a_i, b_i)` for the positional pairs of `first` and `second`.
///
/// ```rust
/// use linq::prelude::*;
///
/// let sums = zip(|a: i32, b: i32| a + b, from(vec![3, 1, 4]), from(vec![2, 7, 1, 8, 2, 8]));
/// assert_eq!(sums.to_vec().unwrap(), vec![5, 8, 5]);
/// ```
pub fn zip<A, B, R, F>(f: F, first: A, second: B) -> Zip<A, B, F>
where
    A: Enumerator,
    B: Enumerator + Sync,
    B::Item: Send,
    F: Fn(A::Item, B::Item) -> R,
{
    zip_with_config(f, first, second, ZipConfig::default())
}

/// [`zip`] with an explicit worker configuration.
pub fn zip_with_config<A, B, R, F>(f: F, first: A, second: B, config: ZipConfig) -> Zip<A, B, F>
where
    A: Enumerator,
    B: Enumerator + Sync,
    B::Item: Send,
    F: Fn(A::Item, B::Item) -> R,
{
    Zip {
        f,
        first,
        second,
        config,
    }
}

impl<A, B, R, F> Enumerator for Zip<A, B, F>
where
    A: Enumerator,
    B: Enumerator + Sync,
    B::Item: Send,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(R) -> Flow,
    {
        thread::scope(|scope| {
            let (request_tx, request_rx) = bounded::<()>(1);
            let (item_tx, item_rx) = bounded::<B::Item>(0);

            let second = &self.second;
            let worker = self
                .config
                .builder()
                .spawn_scoped(scope, move || feed(second, request_rx, item_tx))
                .map_err(|err| Interrupt::Fail(Error::SpawnWorker(err)))?;
            tracing::debug!(name = ?self.config.name, "zip worker started");

            let flow = self.first.loop_with_exit(|a, exit| {
                if request_tx.send(()).is_err() {
                    return exit.exit();
                }
                match item_rx.recv() {
                    Ok(b) => emit((self.f)(a, b)),
                    Err(_) => {
                        tracing::debug!("secondary sequence of zip is exhausted");
                        exit.exit()
                    }
                }
            });

            drop(request_tx);
            drop(item_rx);
            let fed = match worker.join() {
                Ok(fed) => fed,
                Err(payload) => panic::resume_unwind(payload),
            };
            tracing::debug!("zip worker stopped");

            flow?;
            fed
        })
    }
}

/// Body of the zip worker: hand over one element of `second` per request.
fn feed<B>(second: &B, requests: Receiver<()>, items: Sender<B::Item>) -> Flow
where
    B: Enumerator,
{
    if requests.recv().is_err() {
        tracing::trace!("zip stopped before its secondary sequence was pulled");
        return Ok(());
    }
    second.loop_with_exit(|item, exit| {
        if items.send(item).is_err() {
            return exit.exit();
        }
        match requests.recv() {
            Ok(()) => Ok(()),
            Err(_) => exit.exit(),
        }
    })
}
