//! The two service layers over the store.
//!
//! [`UserService`] dispatches its own work onto the pool and hands back
//! [`Task`] handles; [`DirectUserService`] runs inline so call sites can build
//! tasks however they like. Same two operations either way.

use std::time::Instant;

use bytes::Bytes;
use tracing::{debug, info};

use crate::error::Error;
use crate::model::User;
use crate::parse::parse_users;
use crate::store::UserStore;
use crate::task::{self, Task};

/// Service whose methods run on the worker pool (the caller gets a [`Task`]).
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Parse one uploaded file and persist the batch, on a worker.
    ///
    /// Logs the batch size and elapsed time. The file is all-or-nothing: a
    /// malformed line fails the task and nothing from it is stored.
    pub fn save_users(&self, file: Bytes) -> Task<Vec<User>> {
        let store = self.store.clone();
        task::spawn(async move {
            let start = Instant::now();
            let batch = parse_users(&file)?;
            info!(count = batch.len(), "saving batch of users");
            let users = store.insert_batch(&batch).await?;
            info!(elapsed_ms = start.elapsed().as_millis() as u64, "batch saved");
            Ok(users)
        })
    }

    /// Fetch all stored users, on a worker.
    pub fn find_all_users(&self) -> Task<Vec<User>> {
        let store = self.store.clone();
        task::spawn(async move {
            debug!(worker = ?std::thread::current().name(), "retrieving all users");
            store.find_all().await
        })
    }
}

/// Service whose methods run wherever the caller is; used by endpoints that
/// construct their tasks by hand.
#[derive(Clone)]
pub struct DirectUserService {
    store: UserStore,
}

impl DirectUserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Parse one uploaded file and persist the batch, inline.
    pub async fn save_users(&self, file: Bytes) -> Result<Vec<User>, Error> {
        let start = Instant::now();
        let batch = parse_users(&file)?;
        info!(
            count = batch.len(),
            worker = ?std::thread::current().name(),
            "saving batch of users"
        );
        let users = self.store.insert_batch(&batch).await?;
        info!(elapsed_ms = start.elapsed().as_millis() as u64, "batch saved");
        Ok(users)
    }

    /// Fetch all stored users, inline.
    pub async fn find_all_users(&self) -> Result<Vec<User>, Error> {
        debug!(worker = ?std::thread::current().name(), "retrieving all users");
        self.store.find_all().await
    }
}
