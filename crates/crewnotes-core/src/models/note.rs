//! Note domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    /// Weak reference to the owning user's id. Not validated against
    /// existing users at write time; enforced only at user deletion.
    pub user: Uuid,
    /// Unique across the whole collection, not per user.
    pub title: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    pub user: Uuid,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNote {
    pub user: Uuid,
    pub title: String,
    pub text: String,
    pub completed: bool,
}
