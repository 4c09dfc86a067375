//! SQLite-backed data access for user records.
//!
//! A pass-through over `sqlx`: no caching, no indexing beyond the primary
//! key. Batch inserts run in one transaction so a file is persisted
//! all-or-nothing.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::Error;
use crate::model::{NewUser, User};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    gender TEXT NOT NULL
)";

/// Handle to the user table. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Connect to `url` (e.g. `sqlite::memory:` or `sqlite://users.db`),
    /// creating the database file and schema if needed.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the database is unreachable.
    pub async fn connect(url: &str) -> Result<Self, Error> {
        let opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // An in-memory SQLite database exists per connection, so the pool must
        // not hand out a second connection that sees an empty table.
        let max_connections = if url.contains(":memory:") || url.contains("mode=memory") {
            1
        } else {
            5
        };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Persist a batch in one transaction, returning the stored rows with
    /// their generated ids in input order.
    ///
    /// # Errors
    /// Any insert failure rolls back the whole batch.
    pub async fn insert_batch(&self, batch: &[NewUser]) -> Result<Vec<User>, Error> {
        let mut tx = self.pool.begin().await?;
        let mut out = Vec::with_capacity(batch.len());
        for user in batch {
            let res = sqlx::query("INSERT INTO users (name, email, gender) VALUES (?1, ?2, ?3)")
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.gender)
                .execute(&mut *tx)
                .await?;
            out.push(User {
                id: res.last_insert_rowid(),
                name: user.name.clone(),
                email: user.email.clone(),
                gender: user.gender.clone(),
            });
        }
        tx.commit().await?;
        Ok(out)
    }

    /// All stored records in id order.
    pub async fn find_all(&self) -> Result<Vec<User>, Error> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, name, email, gender FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }
}
