//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Lookups that may legitimately
//! miss (`find_by_*`) return `Option`; `update` and `delete` fail with
//! `NotFound` when the target record is gone.

use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, UpdateUser, User};

pub trait UserRepository: Send + Sync {
    fn find_all(&self) -> impl Future<Output = CoreResult<Vec<User>>> + Send;

    fn find_by_id(&self, id: Uuid) -> impl Future<Output = CoreResult<Option<User>>> + Send;

    /// Case-sensitive exact match, used for the duplicate-username check.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = CoreResult<Option<User>>> + Send;

    /// Persist a new user. The raw password in `input` is hashed by the
    /// implementation before storage.
    fn create(&self, input: CreateUser) -> impl Future<Output = CoreResult<User>> + Send;

    /// Overwrite username, roles, and active; re-hash and overwrite the
    /// password only when `input.password` is present.
    fn update(
        &self,
        id: Uuid,
        input: UpdateUser,
    ) -> impl Future<Output = CoreResult<User>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = CoreResult<()>> + Send;
}

pub trait NoteRepository: Send + Sync {
    fn find_all(&self) -> impl Future<Output = CoreResult<Vec<Note>>> + Send;

    fn find_by_id(&self, id: Uuid) -> impl Future<Output = CoreResult<Option<Note>>> + Send;

    /// Collection-wide title lookup, used for the duplicate-title check.
    fn find_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = CoreResult<Option<Note>>> + Send;

    /// Any one note owned by `user`, used to block user deletion while
    /// notes still reference the user.
    fn find_first_for_user(
        &self,
        user: Uuid,
    ) -> impl Future<Output = CoreResult<Option<Note>>> + Send;

    fn create(&self, input: CreateNote) -> impl Future<Output = CoreResult<Note>> + Send;

    fn update(
        &self,
        id: Uuid,
        input: UpdateNote,
    ) -> impl Future<Output = CoreResult<Note>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = CoreResult<()>> + Send;
}
