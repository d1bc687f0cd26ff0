//! Error types shared across the ecosystem.
//!
//! The taxonomy is deliberately thin. The proxy itself raises only
//! [`Error::UnsupportedSessionKind`] and [`Error::UnsupportedOperation`];
//! every other variant belongs to the wrapped session's own vocabulary and
//! passes through the proxy unchanged.

use crate::session::SessionKind;
use std::fmt;

/// Result alias used throughout the ecosystem.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by sessions and the proxy that binds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The session handed to the proxy does not match either recognized
    /// variant: its capability marker disagrees with how it was bound.
    UnsupportedSessionKind {
        /// The variant the session was bound as.
        bound: SessionKind,
        /// The variant the session's marker declared.
        declared: SessionKind,
    },
    /// The operation is not available on this session variant.
    UnsupportedOperation {
        /// Operation name, e.g. `"run_sync"`.
        operation: &'static str,
        /// The variant the proxy is bound to.
        kind: SessionKind,
    },
    /// No row matched a primary-key lookup that requires exactly one.
    NotFound {
        /// Entity name of the missing object.
        entity: &'static str,
    },
    /// The session's backing connection failed.
    Connection {
        /// Driver-supplied description.
        message: String,
    },
    /// A transaction lifecycle call was issued in an invalid state.
    Transaction {
        /// Session-supplied description.
        message: String,
    },
    /// Any other failure reported by the backing database.
    Database {
        /// Session-supplied description.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedSessionKind { bound, declared } => write!(
                f,
                "unsupported session kind: bound as {bound} but session declares {declared}"
            ),
            Error::UnsupportedOperation { operation, kind } => {
                write!(f, "operation `{operation}` is not supported on a {kind} session")
            }
            Error::NotFound { entity } => write!(f, "no row found for entity `{entity}`"),
            Error::Connection { message } => write!(f, "connection error: {message}"),
            Error::Transaction { message } => write!(f, "transaction error: {message}"),
            Error::Database { message } => write!(f, "database error: {message}"),
        }
    }
}

impl std::error::Error for Error {}
