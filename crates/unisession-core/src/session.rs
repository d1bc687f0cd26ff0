//! The session-variant vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two calling conventions a wrapped session may use.
///
/// Every session reports its own kind through a capability marker; the proxy
/// reads it once at construction and dispatches on it for the session's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Operations return their result immediately to the caller.
    Direct,
    /// Operations return a suspension handle the caller must await.
    Suspending,
}

impl SessionKind {
    /// Whether this kind uses the suspending convention.
    pub fn is_async(self) -> bool {
        matches!(self, SessionKind::Suspending)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Direct => write!(f, "direct"),
            SessionKind::Suspending => write!(f, "suspending"),
        }
    }
}
