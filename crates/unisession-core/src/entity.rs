//! The entity contract for objects tracked by a session.

use crate::value::Value;
use std::any::Any;

/// A persistable object a session can track.
///
/// This is the statically typed stand-in for passing an entity class to a
/// session operation: `get::<M>(pk)` names the entity through the type
/// parameter, and `primary_key` gives the session an identity-map key.
pub trait Entity: Any + Send + Sync + 'static {
    /// Entity name, used for diagnostics and legacy query construction.
    const ENTITY_NAME: &'static str;

    /// Current primary-key value of this instance.
    fn primary_key(&self) -> Value;
}
