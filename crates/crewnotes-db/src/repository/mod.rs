//! SurrealDB repository implementations.

mod note;
mod user;

pub use note::SurrealNoteRepository;
pub use user::{SurrealUserRepository, verify_password};
