//! Uninhabited placeholder sessions.
//!
//! A proxy always carries both variant type parameters, but most callers wrap
//! only one concrete session. `NoDirect` and `NoSuspending` fill the unused
//! slot: they implement the session traits but can never be constructed, so
//! `SessionProxy<MySession>` reads naturally and the dead arm compiles away.

use crate::session::{DirectSession, SuspendingSession};
use asupersync::{Cx, Outcome};
use std::future::Future;
use unisession_core::{Entity, Error, ExecuteResult, Result, Statement, Value};
use unisession_query::Query;

/// The absent direct variant. Cannot be constructed.
#[derive(Debug, Clone, Copy)]
pub enum NoDirect {}

/// The absent suspending variant. Cannot be constructed.
#[derive(Debug, Clone, Copy)]
pub enum NoSuspending {}

#[allow(unreachable_code)]
impl DirectSession for NoDirect {
    fn add<M: Entity>(&mut self, _obj: &M) -> Result<()> {
        match *self {}
    }

    fn add_all<M: Entity>(&mut self, _objs: &[M]) -> Result<()> {
        match *self {}
    }

    fn commit(&mut self) -> Result<()> {
        match *self {}
    }

    fn rollback(&mut self) -> Result<()> {
        match *self {}
    }

    fn close(&mut self) -> Result<()> {
        match *self {}
    }

    fn flush(&mut self) -> Result<()> {
        match *self {}
    }

    fn merge<M: Entity + Clone>(&mut self, _obj: &M) -> Result<M> {
        match *self {}
    }

    fn delete<M: Entity>(&mut self, _obj: &M) -> Result<()> {
        match *self {}
    }

    fn get<M: Entity + Clone>(&mut self, _pk: Value) -> Result<Option<M>> {
        match *self {}
    }

    fn get_one<M: Entity + Clone>(&mut self, _pk: Value) -> Result<M> {
        match *self {}
    }

    fn execute(&mut self, _stmt: &Statement) -> Result<ExecuteResult> {
        match *self {}
    }

    fn scalars(&mut self, _stmt: &Statement) -> Result<Vec<Value>> {
        match *self {}
    }

    fn scalar(&mut self, _stmt: &Statement) -> Result<Option<Value>> {
        match *self {}
    }

    fn refresh<M: Entity + Clone>(&mut self, _obj: &mut M) -> Result<()> {
        match *self {}
    }

    fn expire<M: Entity>(&mut self, _obj: &M) -> Result<()> {
        match *self {}
    }

    fn expire_all(&mut self) -> Result<()> {
        match *self {}
    }

    fn expunge<M: Entity>(&mut self, _obj: &M) -> Result<()> {
        match *self {}
    }

    fn expunge_all(&mut self) -> Result<()> {
        match *self {}
    }

    fn is_modified<M: Entity>(&self, _obj: &M) -> Result<bool> {
        match *self {}
    }

    fn in_transaction(&self) -> Result<bool> {
        match *self {}
    }

    fn in_nested_transaction(&self) -> Result<bool> {
        match *self {}
    }

    fn query<M: Entity>(&mut self) -> Result<Query<M>> {
        match *self {}
    }
}

#[allow(unreachable_code)]
impl SuspendingSession for NoSuspending {
    type Bridge = NoDirect;

    fn add<M: Entity>(
        &mut self,
        _cx: &Cx,
        _obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn add_all<M: Entity>(
        &mut self,
        _cx: &Cx,
        _objs: &[M],
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn commit(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn rollback(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn close(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn flush(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn merge<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        _obj: &M,
    ) -> impl Future<Output = Outcome<M, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn delete<M: Entity>(
        &mut self,
        _cx: &Cx,
        _obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn get<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        _pk: Value,
    ) -> impl Future<Output = Outcome<Option<M>, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn get_one<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        _pk: Value,
    ) -> impl Future<Output = Outcome<M, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn execute(
        &mut self,
        _cx: &Cx,
        _stmt: &Statement,
    ) -> impl Future<Output = Outcome<ExecuteResult, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn scalars(
        &mut self,
        _cx: &Cx,
        _stmt: &Statement,
    ) -> impl Future<Output = Outcome<Vec<Value>, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn scalar(
        &mut self,
        _cx: &Cx,
        _stmt: &Statement,
    ) -> impl Future<Output = Outcome<Option<Value>, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn refresh<M: Entity + Clone>(
        &mut self,
        _cx: &Cx,
        _obj: &mut M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn expire<M: Entity>(
        &mut self,
        _cx: &Cx,
        _obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn expire_all(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn expunge<M: Entity>(
        &mut self,
        _cx: &Cx,
        _obj: &M,
    ) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn expunge_all(&mut self, _cx: &Cx) -> impl Future<Output = Outcome<(), Error>> + Send {
        std::future::ready(match *self {})
    }

    fn is_modified<M: Entity>(
        &self,
        _cx: &Cx,
        _obj: &M,
    ) -> impl Future<Output = Outcome<bool, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn in_transaction(&self, _cx: &Cx) -> impl Future<Output = Outcome<bool, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn in_nested_transaction(
        &self,
        _cx: &Cx,
    ) -> impl Future<Output = Outcome<bool, Error>> + Send {
        std::future::ready(match *self {})
    }

    fn run_sync<F, R>(&mut self, _cx: &Cx, _f: F) -> impl Future<Output = Outcome<R, Error>> + Send
    where
        F: FnOnce(&mut Self::Bridge) -> R + Send,
        R: Send,
    {
        std::future::ready(match *self {})
    }
}
