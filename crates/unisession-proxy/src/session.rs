//! The two session calling conventions the proxy can wrap.
//!
//! [`DirectSession`] and [`SuspendingSession`] expose the same operation set
//! under different conventions: direct operations return their result
//! immediately, suspending operations take a [`Cx`] and return a future. The
//! proxy never defines what an operation *does* — transaction semantics,
//! identity-map bookkeeping, and SQL execution all belong to the implementor.

use asupersync::{Cx, Outcome};
use std::future::Future;
use unisession_core::{Entity, Error, ExecuteResult, Result, SessionKind, Statement, Value};
use unisession_query::Query;

/// A database session whose operations return results immediately.
pub trait DirectSession {
    /// Capability marker distinguishing the two session variants.
    ///
    /// The proxy cross-checks this against how the session was bound; only
    /// override it if the implementation genuinely changes convention.
    fn kind(&self) -> SessionKind {
        SessionKind::Direct
    }

    /// Register an object for persistence on the next flush/commit.
    fn add<M: Entity>(&mut self, obj: &M) -> Result<()>;

    /// Register several objects for persistence on the next flush/commit.
    fn add_all<M: Entity>(&mut self, objs: &[M]) -> Result<()>;

    /// Commit the current transaction.
    fn commit(&mut self) -> Result<()>;

    /// Roll back the current transaction.
    fn rollback(&mut self) -> Result<()>;

    /// Close the session.
    fn close(&mut self) -> Result<()>;

    /// Flush pending changes without committing.
    fn flush(&mut self) -> Result<()>;

    /// Merge a detached object into the session, returning the merged instance.
    fn merge<M: Entity + Clone>(&mut self, obj: &M) -> Result<M>;

    /// Mark an object for deletion on the next flush.
    fn delete<M: Entity>(&mut self, obj: &M) -> Result<()>;

    /// Look up an entity by primary key; absent rows yield `Ok(None)`.
    fn get<M: Entity + Clone>(&mut self, pk: Value) -> Result<Option<M>>;

    /// Look up an entity by primary key; absent rows yield
    /// [`Error::NotFound`](unisession_core::Error::NotFound).
    fn get_one<M: Entity + Clone>(&mut self, pk: Value) -> Result<M>;

    /// Execute a statement, returning its generic result.
    fn execute(&mut self, stmt: &Statement) -> Result<ExecuteResult>;

    /// Execute a statement, returning the sequence of first-column scalars.
    fn scalars(&mut self, stmt: &Statement) -> Result<Vec<Value>>;

    /// Execute a statement, returning the first scalar of the first row.
    fn scalar(&mut self, stmt: &Statement) -> Result<Option<Value>>;

    /// Reload an object's state from the backing store, in place.
    fn refresh<M: Entity + Clone>(&mut self, obj: &mut M) -> Result<()>;

    /// Mark an object's cached state as stale.
    fn expire<M: Entity>(&mut self, obj: &M) -> Result<()>;

    /// Mark every tracked object's cached state as stale.
    fn expire_all(&mut self) -> Result<()>;

    /// Remove an object from in-memory tracking without deleting it.
    fn expunge<M: Entity>(&mut self, obj: &M) -> Result<()>;

    /// Remove every object from in-memory tracking without deleting them.
    fn expunge_all(&mut self) -> Result<()>;

    /// Whether the object has unflushed changes.
    fn is_modified<M: Entity>(&self, obj: &M) -> Result<bool>;

    /// Whether a transaction is open.
    fn in_transaction(&self) -> Result<bool>;

    /// Whether a nested transaction (savepoint) is open.
    fn in_nested_transaction(&self) -> Result<bool>;

    /// Construct the legacy query builder for an entity.
    fn query<M: Entity>(&mut self) -> Result<Query<M>>;
}

/// A database session whose operations return a suspension handle.
///
/// Every operation takes a [`Cx`] and returns a future resolving to an
/// [`Outcome`], keeping database calls cancel-correct under structured
/// concurrency. The caller, not the session, decides when to suspend on the
/// handle.
pub trait SuspendingSession {
    /// The direct-style view of this session handed to [`run_sync`]
    /// callbacks.
    ///
    /// [`run_sync`]: SuspendingSession::run_sync
    type Bridge: DirectSession;

    /// Capability marker distinguishing the two session variants.
    fn kind(&self) -> SessionKind {
        SessionKind::Suspending
    }

    /// Register an object for persistence on the next flush/commit.
    fn add<M: Entity>(
        &mut self,
        cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Register several objects for persistence on the next flush/commit.
    fn add_all<M: Entity>(
        &mut self,
        cx: &Cx,
        objs: &[M],
    ) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Commit the current transaction.
    fn commit(&mut self, cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Roll back the current transaction.
    fn rollback(&mut self, cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Close the session.
    fn close(&mut self, cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Flush pending changes without committing.
    fn flush(&mut self, cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Merge a detached object into the session, returning the merged instance.
    fn merge<M: Entity + Clone>(
        &mut self,
        cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<M, Error>> + Send;

    /// Mark an object for deletion on the next flush.
    fn delete<M: Entity>(
        &mut self,
        cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Look up an entity by primary key; absent rows yield `Ok(None)`.
    fn get<M: Entity + Clone>(
        &mut self,
        cx: &Cx,
        pk: Value,
    ) -> impl Future<Output = Outcome<Option<M>, Error>> + Send;

    /// Look up an entity by primary key; absent rows yield
    /// [`Error::NotFound`](unisession_core::Error::NotFound).
    fn get_one<M: Entity + Clone>(
        &mut self,
        cx: &Cx,
        pk: Value,
    ) -> impl Future<Output = Outcome<M, Error>> + Send;

    /// Execute a statement, returning its generic result.
    fn execute(
        &mut self,
        cx: &Cx,
        stmt: &Statement,
    ) -> impl Future<Output = Outcome<ExecuteResult, Error>> + Send;

    /// Execute a statement, returning the sequence of first-column scalars.
    fn scalars(
        &mut self,
        cx: &Cx,
        stmt: &Statement,
    ) -> impl Future<Output = Outcome<Vec<Value>, Error>> + Send;

    /// Execute a statement, returning the first scalar of the first row.
    fn scalar(
        &mut self,
        cx: &Cx,
        stmt: &Statement,
    ) -> impl Future<Output = Outcome<Option<Value>, Error>> + Send;

    /// Reload an object's state from the backing store, in place.
    fn refresh<M: Entity + Clone>(
        &mut self,
        cx: &Cx,
        obj: &mut M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Mark an object's cached state as stale.
    fn expire<M: Entity>(
        &mut self,
        cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Mark every tracked object's cached state as stale.
    fn expire_all(&mut self, cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Remove an object from in-memory tracking without deleting it.
    fn expunge<M: Entity>(
        &mut self,
        cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Remove every object from in-memory tracking without deleting them.
    fn expunge_all(&mut self, cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send;

    /// Whether the object has unflushed changes.
    fn is_modified<M: Entity>(
        &self,
        cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<bool, Error>> + Send;

    /// Whether a transaction is open.
    fn in_transaction(&self, cx: &Cx) -> impl Future<Output = Outcome<bool, Error>> + Send;

    /// Whether a nested transaction (savepoint) is open.
    fn in_nested_transaction(
        &self,
        cx: &Cx,
    ) -> impl Future<Output = Outcome<bool, Error>> + Send;

    /// Blocking-bridge facility: run a direct-style callback against this
    /// session from within the suspending context.
    ///
    /// Only suspending sessions expose this; it is how the proxy constructs
    /// the legacy query builder, which is only reachable through a
    /// blocking-style call.
    fn run_sync<F, R>(&mut self, cx: &Cx, f: F) -> impl Future<Output = Outcome<R, Error>> + Send
    where
        F: FnOnce(&mut Self::Bridge) -> R + Send,
        R: Send;
}
