//! The uniform return shape for proxied operations.

use asupersync::Outcome;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use unisession_core::{Error, Result};

/// The result of forwarding one operation through the proxy.
///
/// A proxy over a direct session yields [`Dispatch::Ready`] carrying exactly
/// the value the wrapped operation returned; a proxy over a suspending
/// session yields [`Dispatch::Suspended`] carrying the wrapped session's own
/// suspension handle, still unresolved. `.await` works on either arm: a ready
/// value resolves immediately, a suspended one resolves when the underlying
/// handle does. The proxy never waits on the handle itself.
pub enum Dispatch<'s, T> {
    /// Direct forwarding: the wrapped operation already completed.
    Ready(Result<T>),
    /// Suspending forwarding: the wrapped operation is still pending.
    Suspended(Pin<Box<dyn Future<Output = Outcome<T, Error>> + Send + 's>>),
}

impl<'s, T> Dispatch<'s, T> {
    /// Wrap a completed direct-session result.
    pub fn ready(result: Result<T>) -> Self {
        Dispatch::Ready(result)
    }

    /// Wrap a suspending-session handle.
    pub fn suspended(fut: impl Future<Output = Outcome<T, Error>> + Send + 's) -> Self {
        Dispatch::Suspended(Box::pin(fut))
    }

    /// Whether this dispatch still needs to be awaited.
    pub fn is_suspended(&self) -> bool {
        matches!(self, Dispatch::Suspended(_))
    }

    /// Extract the result without suspending.
    ///
    /// `Some` exactly when the proxy wraps a direct session; a suspended
    /// dispatch returns `None` (and is consumed, like any unawaited handle
    /// the caller discards).
    pub fn now(self) -> Option<Result<T>> {
        match self {
            Dispatch::Ready(result) => Some(result),
            Dispatch::Suspended(_) => None,
        }
    }
}

impl<'s, T> fmt::Debug for Dispatch<'s, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Ready(_) => f.write_str("Dispatch::Ready(..)"),
            Dispatch::Suspended(_) => f.write_str("Dispatch::Suspended(..)"),
        }
    }
}

impl<'s, T: Send + 's> IntoFuture for Dispatch<'s, T> {
    type Output = Outcome<T, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Outcome<T, Error>> + Send + 's>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Dispatch::Ready(result) => Box::pin(std::future::ready(match result {
                Ok(value) => Outcome::Ok(value),
                Err(err) => Outcome::Err(err),
            })),
            Dispatch::Suspended(fut) => fut,
        }
    }
}
