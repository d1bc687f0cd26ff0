//! Unisession: one session surface for blocking and suspending database
//! sessions.
//!
//! Calling code holds a [`SessionProxy`] and issues the same sequence of
//! operations whether the wrapped session returns results directly or hands
//! back suspension handles. The proxy detects the calling convention once,
//! at construction, and forwards every call down the matching path.
//!
//! This crate is the facade: it re-exports the contract layer
//! (`unisession-core`), the legacy query builder (`unisession-query`), and
//! the proxy itself (`unisession-proxy`) so applications depend on one crate.
//!
//! # Example
//!
//! ```ignore
//! use unisession::prelude::*;
//!
//! // Same call shape either way; only resolution differs.
//! let mut proxy = SessionProxy::direct(blocking_session)?;
//! proxy.add(&cx, &hero).now().unwrap()?;
//!
//! let mut proxy = SessionProxy::suspending(async_session)?;
//! proxy.add(&cx, &hero).await?;
//! ```

pub use unisession_core::{
    Budget, Cx, Entity, Error, ExecuteResult, Outcome, RegionId, Result, Row, SessionKind,
    Statement, TaskId, Value,
};
pub use unisession_proxy::{
    Dispatch, DirectSession, NoDirect, NoSuspending, SessionProxy, SessionRef, SuspendingSession,
};
pub use unisession_query::Query;

/// Common imports for applications using the proxy.
pub mod prelude {
    pub use unisession_core::{
        Cx, Entity, Error, ExecuteResult, Outcome, Result, Row, SessionKind, Statement, Value,
    };
    pub use unisession_proxy::{
        Dispatch, DirectSession, SessionProxy, SessionRef, SuspendingSession,
    };
    pub use unisession_query::Query;
}
