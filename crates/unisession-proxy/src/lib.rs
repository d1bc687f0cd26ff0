//! Session proxy for Unisession.
//!
//! One surface, two calling conventions. [`SessionProxy`] wraps exactly one
//! database session — blocking ([`DirectSession`]) or suspension-based
//! ([`SuspendingSession`]) — detects which at construction, and forwards
//! every operation down the matching path. Callers hold a proxy and issue the
//! same call sequence regardless of the variant underneath.
//!
//! # Design Philosophy
//!
//! - **Detect once, dispatch forever**: the `is_async` flag is computed at
//!   bind time and never changes.
//! - **Transparent forwarding**: arguments, results, and errors cross the
//!   proxy untouched; the proxy performs no retries, caching, or batching.
//! - **Caller-driven suspension**: a suspended [`Dispatch`] is resolved by
//!   whoever awaits it, never by the proxy.
//!
//! # Example
//!
//! ```ignore
//! let mut proxy = SessionProxy::suspending(session)?;
//! assert!(proxy.is_async());
//!
//! proxy.add(&cx, &hero).await?;
//! proxy.commit(&cx).await?;
//! let found: Option<Hero> = match proxy.get(&cx, Value::Int(1)).await {
//!     Outcome::Ok(found) => found,
//!     Outcome::Err(err) => return Err(err),
//!     _ => return Ok(()),
//! };
//! ```

pub mod dispatch;
pub mod nosession;
pub mod proxy;
pub mod session;

pub use dispatch::Dispatch;
pub use nosession::{NoDirect, NoSuspending};
pub use proxy::{SessionProxy, SessionRef};
pub use session::{DirectSession, SuspendingSession};
