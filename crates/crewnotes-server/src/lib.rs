//! CrewNotes Server — HTTP surface over the user and note services.
//!
//! The binary in `main.rs` wires configuration, logging, the database
//! connection, and the actix-web application together; everything else
//! lives here so integration tests can assemble the same app against an
//! in-memory database.

pub mod config;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
