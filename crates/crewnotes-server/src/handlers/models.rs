//! Request and response bodies for the HTTP surface.

use chrono::{DateTime, Utc};
use crewnotes_core::models::note::Note;
use crewnotes_core::models::user::User;
use crewnotes_service::NoteWithOwner;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------

/// User as returned to clients. The password hash is not part of this
/// type, so it can never leak into a response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            roles: user.roles,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    pub active: bool,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub id: Uuid,
}

// ---------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------

/// Note as returned by the list endpoint, joined with the owner's
/// username.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub user: Uuid,
    pub username: String,
    pub title: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteWithOwner> for NoteResponse {
    fn from(entry: NoteWithOwner) -> Self {
        let Note {
            id,
            user,
            title,
            text,
            completed,
            created_at,
            updated_at,
        } = entry.note;
        Self {
            id,
            user,
            username: entry.username,
            title,
            text,
            completed,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub user: Uuid,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: Uuid,
    pub user: Uuid,
    pub title: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteNoteRequest {
    pub id: Uuid,
}
