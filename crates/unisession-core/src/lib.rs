//! Core types and session vocabulary for Unisession.
//!
//! `unisession-core` is the **contract layer** for the ecosystem. It defines
//! the data types session operations exchange and the vocabulary that names
//! the two session calling conventions.
//!
//! # Role In The Architecture
//!
//! - **Data model**: [`Row`], [`Value`], [`Statement`], and [`ExecuteResult`]
//!   represent operation inputs/outputs shared across crates; [`Entity`] is
//!   the contract for objects a session tracks.
//! - **Variant vocabulary**: [`SessionKind`] is the capability marker that
//!   distinguishes the two session calling conventions. The traits themselves
//!   live next to the proxy in `unisession-proxy`.
//! - **Structured concurrency**: re-exports `Cx` and `Outcome` from asupersync so
//!   every suspending operation is cancel-correct and budget-aware.
//!
//! Most applications should use the `unisession` facade; reach for
//! `unisession-core` directly when implementing a session backend.

// Re-export asupersync primitives for structured concurrency
pub use asupersync::{Budget, Cx, Outcome, RegionId, TaskId};

pub mod entity;
pub mod error;
pub mod row;
pub mod session;
pub mod statement;
pub mod value;

pub use entity::Entity;
pub use error::{Error, Result};
pub use row::Row;
pub use session::SessionKind;
pub use statement::{ExecuteResult, Statement};
pub use value::Value;
