//! Fake sessions for exercising the proxy from the outside.
//!
//! `FakeDirectSession` keeps a tiny identity map and a call log so tests can
//! check that arguments arrive unchanged and results come back untouched.
//! `FakeSuspendingSession` wraps one as its own blocking bridge and serves
//! every operation through a ready future.

#![allow(dead_code)]

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use unisession::prelude::*;

pub fn unwrap_outcome<T>(outcome: Outcome<T, Error>) -> std::result::Result<T, String> {
    match outcome {
        Outcome::Ok(v) => Ok(v),
        Outcome::Err(e) => Err(format!("unexpected error: {e}")),
        Outcome::Cancelled(r) => Err(format!("cancelled: {r:?}")),
        Outcome::Panicked(p) => Err(format!("panicked: {p:?}")),
    }
}

fn outcome<T>(result: Result<T>) -> Outcome<T, Error> {
    match result {
        Ok(v) => Outcome::Ok(v),
        Err(e) => Outcome::Err(e),
    }
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub id: i64,
    pub name: String,
}

impl Hero {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Entity for Hero {
    const ENTITY_NAME: &'static str = "hero";

    fn primary_key(&self) -> Value {
        Value::Int(self.id)
    }
}

// ============================================================================
// Direct Fake
// ============================================================================

/// Blocking fake session with canned answers and a call log.
///
/// The log and the armed failure live in `RefCell`s so the introspection
/// operations, which take `&self`, report into them like everything else.
pub struct FakeDirectSession {
    store: HashMap<(TypeId, Value), Box<dyn Any + Send + Sync>>,
    calls: RefCell<Vec<&'static str>>,
    pub last_pk: Option<Value>,
    pub last_sql: Option<String>,
    pub in_tx: bool,
    pub in_nested_tx: bool,
    pub closed: bool,
    pub modified: Vec<Value>,
    pub canned_rows: Vec<Row>,
    pub canned_scalars: Vec<Value>,
    pub canned_affected: u64,
    fail_next: RefCell<Option<Error>>,
}

impl FakeDirectSession {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            calls: RefCell::new(Vec::new()),
            last_pk: None,
            last_sql: None,
            in_tx: false,
            in_nested_tx: false,
            closed: false,
            modified: Vec::new(),
            canned_rows: Vec::new(),
            canned_scalars: Vec::new(),
            canned_affected: 0,
            fail_next: RefCell::new(None),
        }
    }

    /// Operations observed so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Preload an object so `get`/`get_one`/`refresh` can serve it.
    pub fn seed<M: Entity + Clone>(&mut self, obj: M) {
        let key = (TypeId::of::<M>(), obj.primary_key());
        self.store.insert(key, Box::new(obj));
    }

    /// Whether an object with this primary key is tracked.
    pub fn contains<M: Entity>(&self, pk: &Value) -> bool {
        self.store.contains_key(&(TypeId::of::<M>(), pk.clone()))
    }

    /// Arm the next operation to fail with `err`.
    pub fn fail_next(&mut self, err: Error) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    fn take_failure(&self) -> Result<()> {
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&self, op: &'static str) {
        self.calls.borrow_mut().push(op);
    }
}

impl Default for FakeDirectSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectSession for FakeDirectSession {
    fn add<M: Entity>(&mut self, obj: &M) -> Result<()> {
        self.record("add");
        self.take_failure()?;
        self.last_pk = Some(obj.primary_key());
        Ok(())
    }

    fn add_all<M: Entity>(&mut self, objs: &[M]) -> Result<()> {
        self.record("add_all");
        self.take_failure()?;
        self.last_pk = objs.last().map(|o| o.primary_key());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.record("commit");
        self.take_failure()?;
        self.in_tx = false;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.record("rollback");
        self.take_failure()?;
        self.in_tx = false;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.record("close");
        self.take_failure()?;
        self.closed = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.record("flush");
        self.take_failure()?;
        // Auto-begin on first write, like a unit-of-work session.
        self.in_tx = true;
        Ok(())
    }

    fn merge<M: Entity + Clone>(&mut self, obj: &M) -> Result<M> {
        self.record("merge");
        self.take_failure()?;
        let merged = obj.clone();
        self.seed(merged.clone());
        Ok(merged)
    }

    fn delete<M: Entity>(&mut self, obj: &M) -> Result<()> {
        self.record("delete");
        self.take_failure()?;
        self.last_pk = Some(obj.primary_key());
        Ok(())
    }

    fn get<M: Entity + Clone>(&mut self, pk: Value) -> Result<Option<M>> {
        self.record("get");
        self.take_failure()?;
        self.last_pk = Some(pk.clone());
        let found = self
            .store
            .get(&(TypeId::of::<M>(), pk))
            .and_then(|boxed| boxed.downcast_ref::<M>())
            .cloned();
        Ok(found)
    }

    fn get_one<M: Entity + Clone>(&mut self, pk: Value) -> Result<M> {
        self.record("get_one");
        self.take_failure()?;
        self.last_pk = Some(pk.clone());
        self.store
            .get(&(TypeId::of::<M>(), pk))
            .and_then(|boxed| boxed.downcast_ref::<M>())
            .cloned()
            .ok_or(Error::NotFound {
                entity: M::ENTITY_NAME,
            })
    }

    fn execute(&mut self, stmt: &Statement) -> Result<ExecuteResult> {
        self.record("execute");
        self.take_failure()?;
        self.last_sql = Some(stmt.sql().to_string());
        let mut result = ExecuteResult::with_rows(self.canned_rows.clone());
        result.rows_affected = self.canned_affected;
        Ok(result)
    }

    fn scalars(&mut self, stmt: &Statement) -> Result<Vec<Value>> {
        self.record("scalars");
        self.take_failure()?;
        self.last_sql = Some(stmt.sql().to_string());
        Ok(self.canned_scalars.clone())
    }

    fn scalar(&mut self, stmt: &Statement) -> Result<Option<Value>> {
        self.record("scalar");
        self.take_failure()?;
        self.last_sql = Some(stmt.sql().to_string());
        Ok(self.canned_scalars.first().cloned())
    }

    fn refresh<M: Entity + Clone>(&mut self, obj: &mut M) -> Result<()> {
        self.record("refresh");
        self.take_failure()?;
        let key = (TypeId::of::<M>(), obj.primary_key());
        if let Some(stored) = self.store.get(&key).and_then(|b| b.downcast_ref::<M>()) {
            *obj = stored.clone();
        }
        Ok(())
    }

    fn expire<M: Entity>(&mut self, obj: &M) -> Result<()> {
        self.record("expire");
        self.take_failure()?;
        self.last_pk = Some(obj.primary_key());
        Ok(())
    }

    fn expire_all(&mut self) -> Result<()> {
        self.record("expire_all");
        self.take_failure()
    }

    fn expunge<M: Entity>(&mut self, obj: &M) -> Result<()> {
        self.record("expunge");
        self.take_failure()?;
        self.store.remove(&(TypeId::of::<M>(), obj.primary_key()));
        Ok(())
    }

    fn expunge_all(&mut self) -> Result<()> {
        self.record("expunge_all");
        self.take_failure()?;
        self.store.clear();
        Ok(())
    }

    fn is_modified<M: Entity>(&self, obj: &M) -> Result<bool> {
        self.record("is_modified");
        self.take_failure()?;
        Ok(self.modified.contains(&obj.primary_key()))
    }

    fn in_transaction(&self) -> Result<bool> {
        self.record("in_transaction");
        self.take_failure()?;
        Ok(self.in_tx)
    }

    fn in_nested_transaction(&self) -> Result<bool> {
        self.record("in_nested_transaction");
        self.take_failure()?;
        Ok(self.in_nested_tx)
    }

    fn query<M: Entity>(&mut self) -> Result<Query<M>> {
        self.record("query");
        self.take_failure()?;
        Ok(Query::new())
    }
}

// ============================================================================
// Suspending Fake
// ============================================================================

/// Suspending fake session; its own blocking bridge is a `FakeDirectSession`.
pub struct FakeSuspendingSession {
    inner: FakeDirectSession,
}

impl FakeSuspendingSession {
    pub fn new() -> Self {
        Self {
            inner: FakeDirectSession::new(),
        }
    }

    pub fn inner(&self) -> &FakeDirectSession {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut FakeDirectSession {
        &mut self.inner
    }
}

impl Default for FakeSuspendingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspendingSession for FakeSuspendingSession {
    type Bridge = FakeDirectSession;

    fn add<M: Entity>(
        &mut self,
        _cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.add(obj)))
    }

    fn add_all<M: Entity>(
        &mut self,
        _cx: &Cx,
        objs: &[M],
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.add_all(objs)))
    }

    fn commit(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.commit()))
    }

    fn rollback(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.rollback()))
    }

    fn close(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.close()))
    }

    fn flush(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.flush()))
    }

    fn merge<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<M, Error>> + Send {
        std::future::ready(outcome(self.inner.merge(obj)))
    }

    fn delete<M: Entity>(
        &mut self,
        _cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.delete(obj)))
    }

    fn get<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        pk: Value,
    ) -> impl Future<Output = Outcome<Option<M>, Error>> + Send {
        std::future::ready(outcome(self.inner.get::<M>(pk)))
    }

    fn get_one<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        pk: Value,
    ) -> impl Future<Output = Outcome<M, Error>> + Send {
        std::future::ready(outcome(self.inner.get_one::<M>(pk)))
    }

    fn execute(
        &mut self,
        _cx: &Cx,
        stmt: &Statement,
    ) -> impl Future<Output = Outcome<ExecuteResult, Error>> + Send {
        std::future::ready(outcome(self.inner.execute(stmt)))
    }

    fn scalars(
        &mut self,
        _cx: &Cx,
        stmt: &Statement,
    ) -> impl Future<Output = Outcome<Vec<Value>, Error>> + Send {
        std::future::ready(outcome(self.inner.scalars(stmt)))
    }

    fn scalar(
        &mut self,
        _cx: &Cx,
        stmt: &Statement,
    ) -> impl Future<Output = Outcome<Option<Value>, Error>> + Send {
        std::future::ready(outcome(self.inner.scalar(stmt)))
    }

    fn refresh<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        obj: &mut M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.refresh(obj)))
    }

    fn expire<M: Entity>(
        &mut self,
        _cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.expire(obj)))
    }

    fn expire_all(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.expire_all()))
    }

    fn expunge<M: Entity>(
        &mut self,
        _cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.expunge(obj)))
    }

    fn expunge_all(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(outcome(self.inner.expunge_all()))
    }

    fn is_modified<M: Entity>(
        &self,
        _cx: &Cx,
        obj: &M,
    ) -> impl Future<Output = Outcome<bool, Error>> + Send {
        std::future::ready(outcome(self.inner.is_modified(obj)))
    }

    fn in_transaction(&self, _cx: &Cx) -> impl Future<Output = Outcome<bool, Error>> + Send {
        std::future::ready(outcome(self.inner.in_transaction()))
    }

    fn in_nested_transaction(
        &self,
        _cx: &Cx,
    ) -> impl Future<Output = Outcome<bool, Error>> + Send {
        std::future::ready(outcome(self.inner.in_nested_transaction()))
    }

    fn run_sync<F, R>(&mut self, _cx: &Cx, f: F) -> impl Future<Output = Outcome<R, Error>> + Send
    where
        F: FnOnce(&mut Self::Bridge) -> R + Send,
        R: Send,
    {
        std::future::ready(Outcome::Ok(f(&mut self.inner)))
    }
}
