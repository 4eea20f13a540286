//! Non-local exit for push sequences.
//!
//! A push sequence drives its consumer, so the only way to stop it early is for
//! the consumer to hand back a signal that every intervening frame forwards
//! with `?`. [`Flow`] is that protocol: `Ok(())` asks for the next element and
//! `Err(Interrupt)` unwinds the whole pipeline.
//!
//! Every call to [`loop_with_exit`] mints a fresh [`ExitToken`]. The loop only
//! swallows an [`Interrupt::Exit`] carrying its own token; exits minted by an
//! enclosing loop and failures pass through untouched.
//!
//! ```rust
//! use linq::prelude::*;
//!
//! let mut seen = Vec::new();
//! let flow = range(1, 10).loop_with_exit(|n, exit| {
//!     if n > 3 {
//!         return exit.exit();
//!     }
//!     seen.push(n);
//!     Ok(())
//! });
//! assert!(flow.is_ok());
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

use std::{
    fmt, io,
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{Enumerator, Error};

/// Outcome of handing one element to a consumer.
pub type Flow = Result<(), Interrupt>;

/// Identity of a single [`loop_with_exit`] invocation.
///
/// Tokens come from a process-wide counter, so two invocations never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitToken(NonZeroU64);

impl ExitToken {
    fn mint() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let id = NEXT.fetch_add(1, Ordering::Relaxed);
        ExitToken(NonZeroU64::new(id).unwrap_or(NonZeroU64::MIN))
    }
}

impl fmt::Display for ExitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit#{}", self.0)
    }
}

/// Signal unwinding a running pipeline.
#[derive(Debug)]
pub enum Interrupt {
    /// Intentional early stop, claimed by the loop that minted the token.
    Exit(ExitToken),
    /// A failure that must reach the caller.
    Fail(Error),
}

impl Interrupt {
    /// Build a failure signal from any error.
    pub fn fail<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Interrupt::Fail(Error::other(err))
    }

    /// Returns `true` for [`Interrupt::Exit`].
    #[inline]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Interrupt::Exit(_))
    }

    /// Returns `true` for [`Interrupt::Fail`].
    #[inline]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Interrupt::Fail(_))
    }

    /// Convert into the error a top-level driver reports.
    ///
    /// An exit reaching this point was never claimed by its loop.
    pub fn into_error(self) -> Error {
        match self {
            Interrupt::Fail(err) => err,
            Interrupt::Exit(token) => {
                tracing::warn!(%token, "exit signal reached the top of the pipeline");
                Error::StrayExit
            }
        }
    }
}

impl From<Error> for Interrupt {
    fn from(err: Error) -> Self {
        Interrupt::Fail(err)
    }
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Fail(Error::Read(err))
    }
}

/// Exit capability lent to the body of [`loop_with_exit`].
#[derive(Debug)]
pub struct Exit {
    token: ExitToken,
}

impl Exit {
    pub(crate) fn mint() -> Self {
        Exit {
            token: ExitToken::mint(),
        }
    }

    /// The token this loop answers to.
    pub fn token(&self) -> ExitToken {
        self.token
    }

    /// The signal that stops this loop.
    pub fn signal(&self) -> Interrupt {
        Interrupt::Exit(self.token)
    }

    /// Stop the loop; return this from the body.
    ///
    /// Generic over the success type so it fits any body, e.g. `exit.exit()?`.
    #[inline]
    pub fn exit<R>(&self) -> Result<R, Interrupt> {
        Err(self.signal())
    }

    /// Claim this loop's own exit and forward everything else.
    pub(crate) fn catch(&self, flow: Flow) -> Flow {
        match flow {
            Err(Interrupt::Exit(token)) if token == self.token => {
                tracing::trace!(%token, "loop stopped by its own exit");
                Ok(())
            }
            Err(Interrupt::Exit(token)) => {
                tracing::trace!(%token, own = %self.token, "forwarding exit of an enclosing loop");
                Err(Interrupt::Exit(token))
            }
            other => other,
        }
    }
}

/// Run `seq`, passing each element together with an [`Exit`] to `body`.
///
/// Returning `exit.exit()` from `body` stops `seq` immediately and this call
/// returns `Ok(())`. Any other interrupt is returned unchanged.
pub fn loop_with_exit<E, F>(seq: &E, mut body: F) -> Flow
where
    E: Enumerator,
    F: FnMut(E::Item, &Exit) -> Flow,
{
    let exit = Exit::mint();
    let flow = seq.run(|item| body(item, &exit));
    exit.catch(flow)
}

/// Map the final [`Flow`] of a top-level run to the caller's error.
pub(crate) fn finish(flow: Flow) -> Result<(), Error> {
    flow.map_err(Interrupt::into_error)
}
