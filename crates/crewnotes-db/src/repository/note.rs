//! SurrealDB implementation of [`NoteRepository`].
//!
//! The owning user is stored as a plain UUID string — a weak reference,
//! never validated against the `user` table at write time.

use chrono::{DateTime, Utc};
use crewnotes_core::error::CoreResult;
use crewnotes_core::models::note::{CreateNote, Note, UpdateNote};
use crewnotes_core::repository::NoteRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct NoteRow {
    user: String,
    title: String,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct NoteRowWithId {
    record_id: String,
    user: String,
    title: String,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn try_into_note(self, id: Uuid) -> Result<Note, DbError> {
        let user = Uuid::parse_str(&self.user)
            .map_err(|e| DbError::Data(format!("invalid owner UUID: {e}")))?;
        Ok(Note {
            id,
            user,
            title: self.title,
            text: self.text,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl NoteRowWithId {
    fn try_into_note(self) -> Result<Note, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Data(format!("invalid note UUID: {e}")))?;
        let user = Uuid::parse_str(&self.user)
            .map_err(|e| DbError::Data(format!("invalid owner UUID: {e}")))?;
        Ok(Note {
            id,
            user,
            title: self.title,
            text: self.text,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Note repository.
#[derive(Clone)]
pub struct SurrealNoteRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealNoteRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> NoteRepository for SurrealNoteRepository<C> {
    async fn find_all(&self) -> CoreResult<Vec<Note>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM note \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<NoteRowWithId> = result.take(0).map_err(DbError::from)?;
        let notes = rows
            .into_iter()
            .map(|row| row.try_into_note())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(notes)
    }

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<Note>> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('note', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_note(id)?)),
            None => Ok(None),
        }
    }

    async fn find_by_title(&self, title: &str) -> CoreResult<Option<Note>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM note \
                 WHERE title = $title",
            )
            .bind(("title", title.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<NoteRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_note()?)),
            None => Ok(None),
        }
    }

    async fn find_first_for_user(&self, user: Uuid) -> CoreResult<Option<Note>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM note \
                 WHERE user = $user LIMIT 1",
            )
            .bind(("user", user.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<NoteRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_note()?)),
            None => Ok(None),
        }
    }

    async fn create(&self, input: CreateNote) -> CoreResult<Note> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('note', $id) SET \
                 user = $user, \
                 title = $title, \
                 text = $text, \
                 completed = false",
            )
            .bind(("id", id_str.clone()))
            .bind(("user", input.user.to_string()))
            .bind(("title", input.title))
            .bind(("text", input.text))
            .await
            .map_err(DbError::from)?;

        // A concurrent duplicate title trips the UNIQUE index here.
        let mut result = result.check().map_err(DbError::from)?;

        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "Note",
            id: id_str,
        })?;

        Ok(row.try_into_note(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateNote) -> CoreResult<Note> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('note', $id) SET \
                 user = $user, \
                 title = $title, \
                 text = $text, \
                 completed = $completed, \
                 updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("user", input.user.to_string()))
            .bind(("title", input.title))
            .bind(("text", input.text))
            .bind(("completed", input.completed))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(DbError::from)?;

        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "Note",
            id: id_str,
        })?;

        Ok(row.try_into_note(id)?)
    }

    async fn delete(&self, id: Uuid) -> CoreResult<()> {
        self.db
            .query("DELETE type::record('note', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(DbError::from)?;

        Ok(())
    }
}
