//! CrewNotes Server — application entry point.

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::Result;
use crewnotes_db::DbManager;
use crewnotes_server::config::ServerConfig;
use crewnotes_server::{handlers, logging, middleware, routes, state};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = match ServerConfig::from_file("config.toml") {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Warning: config.toml not found, using defaults");
            ServerConfig::default()
        }
    };

    logging::init(&config.logging.level)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting CrewNotes server");

    let db = DbManager::connect(&config.database.db_config()).await?;
    crewnotes_db::run_migrations(db.client()).await?;

    let (user_service, note_service) =
        state::build_services(db.client().clone(), config.security.pepper.clone());
    let user_service = web::Data::new(user_service);
    let note_service = web::Data::new(note_service);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!(addr = %bind_addr, "Starting HTTP server");

    let allowed_origins = config.security.allowed_origins.clone();
    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::build_cors(&allowed_origins))
            .app_data(handlers::json_config())
            .app_data(user_service.clone())
            .app_data(note_service.clone())
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(&bind_addr)?
    .workers(workers)
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
