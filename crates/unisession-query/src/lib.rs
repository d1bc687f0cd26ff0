//! Legacy query builder for Unisession.
//!
//! [`Query`] is the older-style, fluent query-construction object that the
//! statement-based execution API (`execute`/`scalars`/`scalar` with a
//! [`Statement`](unisession_core::Statement)) has superseded. Sessions still
//! hand it out through their `query` operation for compatibility, so it lives
//! in its own crate below the proxy.

pub mod builder;

pub use builder::Query;
