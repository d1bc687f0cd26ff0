//! The session proxy: one operation surface over both session variants.

use crate::dispatch::Dispatch;
use crate::nosession::{NoDirect, NoSuspending};
use crate::session::{DirectSession, SuspendingSession};
use asupersync::{Cx, Outcome};
use unisession_core::{Entity, Error, ExecuteResult, Result, SessionKind, Statement, Value};
use unisession_query::Query;

/// Tagged reference to exactly one wrapped session.
///
/// This is the statically typed rendition of "inspect the session's runtime
/// type": the variant is decided where the session is handed over, and the
/// proxy dispatches on it thereafter.
#[derive(Debug)]
pub enum SessionRef<D, S> {
    /// A blocking session; operations return directly.
    Direct(D),
    /// A suspending session; operations return handles to await.
    Suspending(S),
}

/// A proxy that forwards the same operation set to either a
/// [`DirectSession`] or a [`SuspendingSession`].
///
/// The calling convention is detected once, at construction, and recorded in
/// the immutable `is_async` flag. Every operation then routes through the
/// matching path and returns a [`Dispatch`]: ready for direct sessions, a
/// suspension handle for suspending ones. The proxy owns no resources beyond
/// the wrapped session it holds, adds no locking or reordering, and forwards
/// arguments, results, and errors untouched.
///
/// # Example
///
/// ```ignore
/// let mut proxy = SessionProxy::direct(session)?;
/// proxy.add(&cx, &hero).now().unwrap()?;
/// proxy.commit(&cx).now().unwrap()?;
///
/// let mut proxy = SessionProxy::suspending(session)?;
/// proxy.add(&cx, &hero).await?;
/// proxy.commit(&cx).await?;
/// ```
#[derive(Debug)]
pub struct SessionProxy<D = NoDirect, S = NoSuspending> {
    session: SessionRef<D, S>,
    is_async: bool,
}

/// Lift a `run_sync` completion whose payload is itself a session result.
fn flatten<T>(outcome: Outcome<Result<T>, Error>) -> Outcome<T, Error> {
    match outcome {
        Outcome::Ok(Ok(value)) => Outcome::Ok(value),
        Outcome::Ok(Err(err)) => Outcome::Err(err),
        Outcome::Err(err) => Outcome::Err(err),
        Outcome::Cancelled(r) => Outcome::Cancelled(r),
        Outcome::Panicked(p) => Outcome::Panicked(p),
    }
}

impl<D: DirectSession> SessionProxy<D, NoSuspending> {
    /// Wrap a direct session.
    pub fn direct(session: D) -> Result<Self> {
        Self::bind(SessionRef::Direct(session))
    }
}

impl<S: SuspendingSession> SessionProxy<NoDirect, S> {
    /// Wrap a suspending session.
    pub fn suspending(session: S) -> Result<Self> {
        Self::bind(SessionRef::Suspending(session))
    }
}

impl<D: DirectSession, S: SuspendingSession> SessionProxy<D, S> {
    /// Bind a session reference, detecting its calling convention.
    ///
    /// The variant tag decides the convention; the session's own capability
    /// marker is cross-checked against it, and a mismatch fails with
    /// [`Error::UnsupportedSessionKind`] rather than forwarding calls down
    /// the wrong path.
    pub fn bind(session: SessionRef<D, S>) -> Result<Self> {
        let (bound, declared) = match &session {
            SessionRef::Direct(s) => (SessionKind::Direct, s.kind()),
            SessionRef::Suspending(s) => (SessionKind::Suspending, s.kind()),
        };
        if declared != bound {
            return Err(Error::UnsupportedSessionKind { bound, declared });
        }
        tracing::debug!(kind = %bound, "Bound session proxy");
        Ok(Self {
            session,
            is_async: bound.is_async(),
        })
    }

    /// Whether the wrapped session uses the suspending convention.
    ///
    /// Computed once at construction; never changes.
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// The wrapped session reference.
    pub fn session(&self) -> &SessionRef<D, S> {
        &self.session
    }

    /// Mutable access to the wrapped session reference.
    pub fn session_mut(&mut self) -> &mut SessionRef<D, S> {
        &mut self.session
    }

    /// Consume the proxy and return the wrapped session reference.
    pub fn into_session(self) -> SessionRef<D, S> {
        self.session
    }

    // ========================================================================
    // Object Tracking
    // ========================================================================

    /// Register an object for persistence on the next flush/commit.
    #[tracing::instrument(level = "debug", skip_all, fields(entity = M::ENTITY_NAME))]
    pub fn add<'s, M: Entity>(&'s mut self, cx: &'s Cx, obj: &'s M) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.add(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.add(cx, obj)),
        }
    }

    /// Register several objects for persistence on the next flush/commit.
    #[tracing::instrument(level = "debug", skip_all, fields(entity = M::ENTITY_NAME, count = objs.len()))]
    pub fn add_all<'s, M: Entity>(&'s mut self, cx: &'s Cx, objs: &'s [M]) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.add_all(objs)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.add_all(cx, objs)),
        }
    }

    /// Merge a detached object into the session, returning the merged instance.
    pub fn merge<'s, M: Entity + Clone>(&'s mut self, cx: &'s Cx, obj: &'s M) -> Dispatch<'s, M> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.merge(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.merge(cx, obj)),
        }
    }

    /// Mark an object for deletion on the next flush.
    #[tracing::instrument(level = "debug", skip_all, fields(entity = M::ENTITY_NAME))]
    pub fn delete<'s, M: Entity>(&'s mut self, cx: &'s Cx, obj: &'s M) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.delete(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.delete(cx, obj)),
        }
    }

    /// Look up an entity by primary key; absent rows yield `Ok(None)`.
    #[tracing::instrument(level = "debug", skip_all, fields(entity = M::ENTITY_NAME))]
    pub fn get<'s, M: Entity + Clone>(&'s mut self, cx: &'s Cx, pk: Value) -> Dispatch<'s, Option<M>> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.get(pk)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.get(cx, pk)),
        }
    }

    /// Look up an entity by primary key; absent rows yield
    /// [`Error::NotFound`].
    #[tracing::instrument(level = "debug", skip_all, fields(entity = M::ENTITY_NAME))]
    pub fn get_one<'s, M: Entity + Clone>(&'s mut self, cx: &'s Cx, pk: Value) -> Dispatch<'s, M> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.get_one(pk)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.get_one(cx, pk)),
        }
    }

    /// Reload an object's state from the backing store, in place.
    pub fn refresh<'s, M: Entity + Clone>(
        &'s mut self,
        cx: &'s Cx,
        obj: &'s mut M,
    ) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.refresh(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.refresh(cx, obj)),
        }
    }

    /// Mark an object's cached state as stale.
    pub fn expire<'s, M: Entity>(&'s mut self, cx: &'s Cx, obj: &'s M) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.expire(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.expire(cx, obj)),
        }
    }

    /// Mark every tracked object's cached state as stale.
    pub fn expire_all<'s>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.expire_all()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.expire_all(cx)),
        }
    }

    /// Remove an object from in-memory tracking without deleting it.
    pub fn expunge<'s, M: Entity>(&'s mut self, cx: &'s Cx, obj: &'s M) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.expunge(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.expunge(cx, obj)),
        }
    }

    /// Remove every object from in-memory tracking without deleting them.
    pub fn expunge_all<'s>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.expunge_all()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.expunge_all(cx)),
        }
    }

    /// Whether the object has unflushed changes.
    pub fn is_modified<'s, M: Entity>(&'s self, cx: &'s Cx, obj: &'s M) -> Dispatch<'s, bool> {
        match &self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.is_modified(obj)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.is_modified(cx, obj)),
        }
    }

    // ========================================================================
    // Transaction Lifecycle
    // ========================================================================

    /// Commit the current transaction.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn commit<'s>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.commit()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.commit(cx)),
        }
    }

    /// Roll back the current transaction.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn rollback<'s>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.rollback()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.rollback(cx)),
        }
    }

    /// Flush pending changes without committing.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn flush<'s>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.flush()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.flush(cx)),
        }
    }

    /// Close the session.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn close<'s>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, ()> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.close()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.close(cx)),
        }
    }

    /// Whether a transaction is open.
    pub fn in_transaction<'s>(&'s self, cx: &'s Cx) -> Dispatch<'s, bool> {
        match &self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.in_transaction()),
            SessionRef::Suspending(session) => Dispatch::suspended(session.in_transaction(cx)),
        }
    }

    /// Whether a nested transaction (savepoint) is open.
    pub fn in_nested_transaction<'s>(&'s self, cx: &'s Cx) -> Dispatch<'s, bool> {
        match &self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.in_nested_transaction()),
            SessionRef::Suspending(session) => {
                Dispatch::suspended(session.in_nested_transaction(cx))
            }
        }
    }

    // ========================================================================
    // Statement Execution
    // ========================================================================

    /// Execute a statement, returning its generic result.
    #[tracing::instrument(level = "debug", skip_all, fields(sql = stmt.sql()))]
    pub fn execute<'s>(&'s mut self, cx: &'s Cx, stmt: &'s Statement) -> Dispatch<'s, ExecuteResult> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.execute(stmt)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.execute(cx, stmt)),
        }
    }

    /// Execute a statement, returning the sequence of first-column scalars.
    pub fn scalars<'s>(&'s mut self, cx: &'s Cx, stmt: &'s Statement) -> Dispatch<'s, Vec<Value>> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.scalars(stmt)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.scalars(cx, stmt)),
        }
    }

    /// Execute a statement, returning the first scalar of the first row.
    pub fn scalar<'s>(&'s mut self, cx: &'s Cx, stmt: &'s Statement) -> Dispatch<'s, Option<Value>> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.scalar(stmt)),
            SessionRef::Suspending(session) => Dispatch::suspended(session.scalar(cx, stmt)),
        }
    }

    // ========================================================================
    // Legacy Query And Blocking Bridge
    // ========================================================================

    /// Construct the legacy query builder for an entity.
    ///
    /// On a direct session this is a plain forwarded call. On a suspending
    /// session the builder is only constructible through a blocking-style
    /// call, so the construction is routed through the session's own
    /// blocking-bridge facility and the handle resolves to the builder.
    #[tracing::instrument(level = "debug", skip_all, fields(entity = M::ENTITY_NAME))]
    pub fn query<'s, M: Entity>(&'s mut self, cx: &'s Cx) -> Dispatch<'s, Query<M>> {
        match &mut self.session {
            SessionRef::Direct(session) => Dispatch::ready(session.query::<M>()),
            SessionRef::Suspending(session) => {
                // The bridge handle is obtained synchronously; only the
                // callback's completion is left for the caller to await.
                let bridged = session.run_sync(cx, |bridge| bridge.query::<M>());
                Dispatch::suspended(async move { flatten(bridged.await) })
            }
        }
    }

    /// Run a direct-style callback against the wrapped suspending session via
    /// its blocking-bridge facility.
    ///
    /// Direct sessions expose no such facility; calling this on a direct
    /// proxy fails with [`Error::UnsupportedOperation`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_sync<'s, F, R>(&'s mut self, cx: &'s Cx, f: F) -> Dispatch<'s, R>
    where
        F: FnOnce(&mut S::Bridge) -> R + Send + 's,
        R: Send + 's,
    {
        match &mut self.session {
            SessionRef::Direct(_) => {
                tracing::debug!("run_sync refused on direct session");
                Dispatch::ready(Err(Error::UnsupportedOperation {
                    operation: "run_sync",
                    kind: SessionKind::Direct,
                }))
            }
            SessionRef::Suspending(session) => Dispatch::suspended(session.run_sync(cx, f)),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
