//! # Userload
//!
//! A **demonstration HTTP service** for loading user records from uploaded CSV
//! files and retrieving them, built to showcase several styles of asynchronous
//! execution over the same two operations (save a batch, find all).
//!
//! ## Execution styles
//!
//! - **Service-managed tasks** - [`UserService`] methods dispatch themselves
//!   onto the runtime's worker pool and hand back a [`Task`] handle.
//! - **Manually constructed tasks** - call sites wrap [`DirectUserService`]
//!   operations in tasks themselves with [`task::spawn`] and
//!   [`task::spawn_detached`].
//! - **Task composition** - [`Task::map`] transforms the eventual value,
//!   [`Task::consume`] observes it for side effects, [`task::join_all`] waits
//!   on a set of tasks at once.
//!
//! ## Endpoints
//!
//! | Route | Behavior |
//! |---|---|
//! | `POST /loadUsersWithAsync` | one save task per uploaded file, `201` immediately |
//! | `GET /retrieveUsersWithAsync` | find-all task mapped into the response |
//! | `GET /retrieveUsersWithAsyncUsingFutureJoin` | three concurrent find-alls, joined, results discarded |
//! | `POST /loadUsersWithFuture` | one detached task saving the files sequentially, `201` immediately |
//! | `GET /retrieveUsersWithFuture` | find-all task, awaited |
//! | `GET /retrieveUsersFilterByName?name=` | find-all mapped through a case-sensitive name filter |
//! | `GET /retrieveUsersFilterByNameLogOutput?name=` | same filter, consumed by logging on the worker |
//!
//! ## Data model
//!
//! Uploads are CSV lines of the form `id,name,email,gender` parsed without
//! quoting or escaping support; column 0 is ignored and the store generates
//! ids on insertion. See [`parse`] for the exact contract.
//!
//! ## Module Overview
//!
//! - [`model`] - the [`User`] record and its unsaved form
//! - [`parse`] - naive CSV splitting of uploaded files
//! - [`store`] - SQLite-backed data access ([`UserStore`])
//! - [`task`] - thin task handles over the runtime's spawn primitive
//! - [`service`] - the two service layers over the store
//! - [`routes`] - HTTP handlers and router assembly
//! - [`config`] - environment-driven configuration

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod routes;
pub mod service;
pub mod store;
pub mod task;

pub use config::Config;
pub use error::Error;
pub use model::{NewUser, User};
pub use routes::app;
pub use service::{DirectUserService, UserService};
pub use store::UserStore;
pub use task::Task;
