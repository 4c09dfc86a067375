//! Thin task handles over the runtime's spawn primitive.
//!
//! This is the whole concurrency surface the endpoints need, nothing more:
//!
//! - [`spawn`] - compute-and-return: run a fallible operation on a worker and
//!   keep a handle to its eventual value
//! - [`Task::map`] - transform the value once it arrives
//! - [`Task::consume`] - observe the value for side effects, keeping only a
//!   completion handle
//! - [`Task::join`] - await the value, surfacing worker panics as [`Error`]
//! - [`Task::detach`] - let the chain finish on its own, logging any failure
//! - [`spawn_detached`] - fire-and-forget without a handle
//! - [`join_all`] - await a set of tasks, discarding their values
//!
//! Dropping a [`Task`] does not cancel the work: the operation itself was
//! spawned eagerly, only the continuations attached afterwards are lost.
//! There are no timeouts, no cancellation paths, and no retries.

use std::future::Future;

use futures_util::future::BoxFuture;

use crate::error::Error;

/// Handle to work running on the pool, plus any continuations chained onto it.
pub struct Task<T> {
    fut: BoxFuture<'static, Result<T, Error>>,
}

/// Run `fut` on a worker and return a handle to its value.
pub fn spawn<T, F>(fut: F) -> Task<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, Error>> + Send + 'static,
{
    let handle = tokio::spawn(fut);
    Task {
        fut: Box::pin(async move { handle.await.map_err(Error::from)? }),
    }
}

/// Run `fut` on a worker with no handle; a failure is logged, not returned.
pub fn spawn_detached<F>(fut: F)
where
    F: Future<Output = Result<(), Error>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = fut.await {
            tracing::error!(error = %err, "detached task failed");
        }
    });
}

/// Await every task, discarding values. The first failure wins.
pub async fn join_all<T>(tasks: Vec<Task<T>>) -> Result<(), Error> {
    let results = futures_util::future::join_all(tasks.into_iter().map(|t| t.fut)).await;
    for res in results {
        res?;
    }
    Ok(())
}

impl<T: Send + 'static> Task<T> {
    /// Chain a transformation of the eventual value.
    pub fn map<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Task {
            fut: Box::pin(async move { self.fut.await.map(f) }),
        }
    }

    /// Chain a side effect on the eventual value, keeping only completion.
    pub fn consume<F>(self, f: F) -> Task<()>
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.map(|value| f(value))
    }

    /// Block until the task (and its chain) completes.
    ///
    /// # Errors
    /// The operation's own error, or [`Error::Worker`] if the worker panicked.
    pub async fn join(self) -> Result<T, Error> {
        self.fut.await
    }

    /// Let the chain run to completion on its own; a failure is logged.
    pub fn detach(self) {
        tokio::spawn(async move {
            if let Err(err) = self.fut.await {
                tracing::error!(error = %err, "detached task failed");
            }
        });
    }
}
