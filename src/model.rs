//! User record types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user record. `id` is generated by the store on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: String,
}

/// An unsaved record parsed from one CSV line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub gender: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            gender: gender.into(),
        }
    }
}
