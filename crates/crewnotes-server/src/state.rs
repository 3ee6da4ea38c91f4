//! Concrete service types and construction.
//!
//! The repositories are generic over the SurrealDB engine; the server
//! pins them to the `any` engine so the same binary can speak to a
//! remote instance (`ws://...`) while tests run against `mem://`.

use crewnotes_db::repository::{SurrealNoteRepository, SurrealUserRepository};
use crewnotes_service::{NoteService, UserService};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub type AppUserService =
    UserService<SurrealUserRepository<Any>, SurrealNoteRepository<Any>>;
pub type AppNoteService =
    NoteService<SurrealNoteRepository<Any>, SurrealUserRepository<Any>>;

/// Build both services over a shared connection.
///
/// The persistence handles are injected here rather than reached
/// through any process-wide state, so tests can substitute an
/// in-memory engine.
pub fn build_services(
    db: Surreal<Any>,
    pepper: Option<String>,
) -> (AppUserService, AppNoteService) {
    let user_repo = match pepper {
        Some(p) => SurrealUserRepository::with_pepper(db.clone(), p),
        None => SurrealUserRepository::new(db.clone()),
    };
    let note_repo = SurrealNoteRepository::new(db);

    let user_service = UserService::new(user_repo.clone(), note_repo.clone());
    let note_service = NoteService::new(note_repo, user_repo);
    (user_service, note_service)
}
