//! CrewNotes Core — domain models, repository traits, and error types.
//!
//! This crate has no database or HTTP dependencies. The service and
//! server layers depend on the traits defined here; the db crate
//! provides the SurrealDB implementations.

pub mod error;
pub mod models;
pub mod repository;
