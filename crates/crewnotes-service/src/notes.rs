//! Note service — list-with-owner, create, update, delete.

use crewnotes_core::error::{CoreError, CoreResult};
use crewnotes_core::models::note::{CreateNote, Note, UpdateNote};
use crewnotes_core::repository::{NoteRepository, UserRepository};
use futures::stream::{self, StreamExt, TryStreamExt};
use uuid::Uuid;

/// Upper bound on concurrent owner lookups during [`NoteService::list`].
const OWNER_LOOKUP_CONCURRENCY: usize = 8;

/// A note joined with its owner's username at read time.
#[derive(Debug, Clone)]
pub struct NoteWithOwner {
    pub note: Note,
    pub username: String,
}

/// Note service.
///
/// Needs the user repository for the per-note username enrichment in
/// [`NoteService::list`].
pub struct NoteService<N: NoteRepository, U: UserRepository> {
    notes: N,
    users: U,
}

impl<N: NoteRepository, U: UserRepository> NoteService<N, U> {
    pub fn new(notes: N, users: U) -> Self {
        Self { notes, users }
    }

    /// All notes, each enriched with the owning user's username.
    ///
    /// The owner lookups are independent, so they run concurrently with
    /// an explicit bound; result order follows the note order.
    pub async fn list(&self) -> CoreResult<Vec<NoteWithOwner>> {
        let notes = self.notes.find_all().await?;
        if notes.is_empty() {
            return Err(CoreError::NotFound("No notes found".into()));
        }

        let users = &self.users;
        stream::iter(notes)
            .map(|note| async move {
                let owner = users.find_by_id(note.user).await?.ok_or_else(|| {
                    // The owner reference is weak; a dangling one is a
                    // data problem, not a client error.
                    CoreError::Internal(format!(
                        "note {} references missing user {}",
                        note.id, note.user
                    ))
                })?;
                Ok(NoteWithOwner {
                    username: owner.username,
                    note,
                })
            })
            .buffered(OWNER_LOOKUP_CONCURRENCY)
            .try_collect()
            .await
    }

    pub async fn create(&self, input: CreateNote) -> CoreResult<Note> {
        if input.title.is_empty() || input.text.is_empty() {
            return Err(CoreError::Validation("All fields are required".into()));
        }

        if self.notes.find_by_title(&input.title).await?.is_some() {
            return Err(CoreError::Conflict("Duplicate note title".into()));
        }

        self.notes.create(input).await
    }

    pub async fn update(&self, id: Uuid, input: UpdateNote) -> CoreResult<Note> {
        if input.title.is_empty() || input.text.is_empty() {
            return Err(CoreError::Validation("All fields are required".into()));
        }

        if self.notes.find_by_id(id).await?.is_none() {
            return Err(CoreError::NotFound("Note not found".into()));
        }

        if let Some(holder) = self.notes.find_by_title(&input.title).await? {
            if holder.id != id {
                return Err(CoreError::Conflict("Duplicate note title".into()));
            }
        }

        self.notes.update(id, input).await
    }

    /// Deletes the note and returns the record as it stood before the
    /// delete, so callers can still report its title and id.
    pub async fn delete(&self, id: Uuid) -> CoreResult<Note> {
        let note = self
            .notes
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Note not found".into()))?;

        self.notes.delete(id).await?;
        Ok(note)
    }
}
