//! HTTP handlers for the user and note collections.
//!
//! Handlers deserialize the request, call the matching service
//! operation, and map the outcome to a status code. Status mapping is
//! normalized across both collections:
//!
//! - `Validation` → 400
//! - `NotFound`   → 404
//! - `Conflict`   → 409
//! - everything else → 500 (logged, generic body)

pub mod models;
mod notes;
mod users;

pub use notes::{create_note, delete_note, list_notes, update_note};
pub use users::{create_user, delete_user, list_users, update_user};

use actix_web::{HttpResponse, web};
use crewnotes_core::error::CoreError;

use models::MessageResponse;

/// Map service errors to HTTP responses.
pub(crate) fn error_response(err: CoreError) -> HttpResponse {
    match err {
        CoreError::Validation(msg) => HttpResponse::BadRequest().json(MessageResponse::new(msg)),
        CoreError::NotFound(msg) => HttpResponse::NotFound().json(MessageResponse::new(msg)),
        CoreError::Conflict(msg) => HttpResponse::Conflict().json(MessageResponse::new(msg)),
        CoreError::Database(msg) | CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "request failed");
            HttpResponse::InternalServerError()
                .json(MessageResponse::new("Internal server error"))
        }
    }
}

/// JSON extractor configuration.
///
/// A body with missing or mistyped fields (a non-boolean `completed`,
/// say) never reaches a handler; it is rejected here with the same
/// message and status the services use for empty fields.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(MessageResponse::new("All fields are required")),
        )
        .into()
    })
}
