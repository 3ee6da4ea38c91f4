//! User service — list, create, update, delete.

use crewnotes_core::error::{CoreError, CoreResult};
use crewnotes_core::models::user::{CreateUser, UpdateUser, User};
use crewnotes_core::repository::{NoteRepository, UserRepository};
use uuid::Uuid;

/// User service.
///
/// Needs the note repository as well: a user cannot be deleted while
/// any note still references it.
pub struct UserService<U: UserRepository, N: NoteRepository> {
    users: U,
    notes: N,
}

impl<U: UserRepository, N: NoteRepository> UserService<U, N> {
    pub fn new(users: U, notes: N) -> Self {
        Self { users, notes }
    }

    /// All users. Callers must strip the password hash before
    /// serializing; see the server crate's response DTO.
    pub async fn list(&self) -> CoreResult<Vec<User>> {
        let users = self.users.find_all().await?;
        if users.is_empty() {
            return Err(CoreError::NotFound("No users found".into()));
        }
        Ok(users)
    }

    pub async fn create(&self, input: CreateUser) -> CoreResult<User> {
        if input.username.is_empty() || input.password.is_empty() || input.roles.is_empty() {
            return Err(CoreError::Validation("All fields are required".into()));
        }

        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(CoreError::Conflict("Username is taken".into()));
        }

        self.users.create(input).await
    }

    pub async fn update(&self, id: Uuid, mut input: UpdateUser) -> CoreResult<User> {
        if input.username.is_empty() || input.roles.is_empty() {
            return Err(CoreError::Validation("All fields are required".into()));
        }
        // An empty password means "leave unchanged", same as absent.
        input.password = input.password.filter(|p| !p.is_empty());

        if self.users.find_by_id(id).await?.is_none() {
            return Err(CoreError::NotFound("User not found".into()));
        }

        if let Some(holder) = self.users.find_by_username(&input.username).await? {
            if holder.id != id {
                return Err(CoreError::Conflict("Duplicate username".into()));
            }
        }

        self.users.update(id, input).await
    }

    /// Deletes the user and returns the record as it stood before the
    /// delete, so callers can still report its username and id.
    pub async fn delete(&self, id: Uuid) -> CoreResult<User> {
        // The notes check answers first, even for ids that don't exist.
        if self.notes.find_first_for_user(id).await?.is_some() {
            return Err(CoreError::Conflict("User has assigned notes".into()));
        }

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound("User not found".into()))?;

        self.users.delete(id).await?;
        Ok(user)
    }
}
