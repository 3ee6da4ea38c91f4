//! User collection handlers.

use actix_web::{HttpResponse, web};
use crewnotes_core::models::user::{CreateUser, UpdateUser};

use crate::state::AppUserService;

use super::error_response;
use super::models::{
    CreateUserRequest, DeleteUserRequest, MessageResponse, UpdateUserRequest, UserResponse,
};

/// GET /users
pub async fn list_users(service: web::Data<AppUserService>) -> HttpResponse {
    match service.list().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err),
    }
}

/// POST /users
pub async fn create_user(
    service: web::Data<AppUserService>,
    body: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    let input = CreateUser {
        username: body.username,
        password: body.password,
        roles: body.roles,
    };

    match service.create(input).await {
        Ok(user) => HttpResponse::Created().json(MessageResponse::new(format!(
            "New user {} created",
            user.username
        ))),
        Err(err) => error_response(err),
    }
}

/// PATCH /users
pub async fn update_user(
    service: web::Data<AppUserService>,
    body: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    let input = UpdateUser {
        username: body.username,
        roles: body.roles,
        active: body.active,
        password: body.password,
    };

    match service.update(body.id, input).await {
        Ok(user) => HttpResponse::Ok()
            .json(MessageResponse::new(format!("{} updated", user.username))),
        Err(err) => error_response(err),
    }
}

/// DELETE /users
pub async fn delete_user(
    service: web::Data<AppUserService>,
    body: web::Json<DeleteUserRequest>,
) -> HttpResponse {
    match service.delete(body.id).await {
        Ok(user) => HttpResponse::Ok().json(MessageResponse::new(format!(
            "Username {} with ID {} deleted",
            user.username, user.id
        ))),
        Err(err) => error_response(err),
    }
}
