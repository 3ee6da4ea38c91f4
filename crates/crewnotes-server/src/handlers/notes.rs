//! Note collection handlers.

use actix_web::{HttpResponse, web};
use crewnotes_core::models::note::{CreateNote, UpdateNote};

use crate::state::AppNoteService;

use super::error_response;
use super::models::{
    CreateNoteRequest, DeleteNoteRequest, MessageResponse, NoteResponse, UpdateNoteRequest,
};

/// GET /notes
pub async fn list_notes(service: web::Data<AppNoteService>) -> HttpResponse {
    match service.list().await {
        Ok(notes) => HttpResponse::Ok().json(
            notes
                .into_iter()
                .map(NoteResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err),
    }
}

/// POST /notes
pub async fn create_note(
    service: web::Data<AppNoteService>,
    body: web::Json<CreateNoteRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    let input = CreateNote {
        user: body.user,
        title: body.title,
        text: body.text,
    };

    match service.create(input).await {
        Ok(note) => HttpResponse::Created().json(MessageResponse::new(format!(
            "New note {} created",
            note.title
        ))),
        Err(err) => error_response(err),
    }
}

/// PATCH /notes
pub async fn update_note(
    service: web::Data<AppNoteService>,
    body: web::Json<UpdateNoteRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    let input = UpdateNote {
        user: body.user,
        title: body.title,
        text: body.text,
        completed: body.completed,
    };

    match service.update(body.id, input).await {
        Ok(note) => {
            HttpResponse::Ok().json(MessageResponse::new(format!("{} updated", note.title)))
        }
        Err(err) => error_response(err),
    }
}

/// DELETE /notes
pub async fn delete_note(
    service: web::Data<AppNoteService>,
    body: web::Json<DeleteNoteRequest>,
) -> HttpResponse {
    match service.delete(body.id).await {
        Ok(note) => HttpResponse::Ok().json(MessageResponse::new(format!(
            "Note {} with ID {} deleted",
            note.title, note.id
        ))),
        Err(err) => error_response(err),
    }
}
