//! Route configuration and the non-API endpoints (landing page,
//! embedded static assets, catch-all 404).

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::handlers;
use crate::handlers::models::MessageResponse;

const INDEX_HTML: &str = include_str!("../static/index.html");
const NOT_FOUND_HTML: &str = include_str!("../static/404.html");
const STYLE_CSS: &str = include_str!("../static/css/style.css");

/// Configure all routes.
///
/// Both collections expose GET/POST/PATCH/DELETE on the collection
/// path; PATCH and DELETE carry the target id in the body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(handlers::list_users))
            .route("", web::post().to(handlers::create_user))
            .route("", web::patch().to(handlers::update_user))
            .route("", web::delete().to(handlers::delete_user)),
    )
    .service(
        web::scope("/notes")
            .route("", web::get().to(handlers::list_notes))
            .route("", web::post().to(handlers::create_note))
            .route("", web::patch().to(handlers::update_note))
            .route("", web::delete().to(handlers::delete_note)),
    )
    .route("/", web::get().to(index))
    .route("/static/css/style.css", web::get().to(style_css));
}

/// GET / — landing page, embedded at build time.
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(INDEX_HTML)
}

async fn style_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLE_CSS)
}

/// Catch-all 404, content-negotiated on the `Accept` header: HTML for
/// browsers, JSON for API clients, plain text otherwise.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    let accept = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("*/*");

    if accept.contains("text/html") || accept.contains("*/*") {
        HttpResponse::NotFound()
            .content_type(header::ContentType::html())
            .body(NOT_FOUND_HTML)
    } else if accept.contains("json") {
        HttpResponse::NotFound().json(MessageResponse::new("404 Not Found"))
    } else {
        HttpResponse::NotFound()
            .content_type(header::ContentType::plaintext())
            .body("404 Not Found")
    }
}
