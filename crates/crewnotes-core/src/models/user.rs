//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique across all users, case-sensitive exact match.
    pub username: String,
    /// Argon2id PHC-format hash. Never serialized into API responses.
    pub password_hash: String,
    /// Role tags. Must be non-empty on create and update.
    pub roles: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub username: String,
    pub roles: Vec<String>,
    pub active: bool,
    /// `Some(raw)` = re-hash and overwrite, `None` = leave unchanged.
    pub password: Option<String>,
}
