//! # Pet Owners Web Service
//!
//! Main entry point of the owner/pet service. Loads configuration, sets up
//! logging, builds the in-memory store and serves the owner and pet routes.

pub mod api;
pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod models;
pub mod repo;

use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let app_config = config::init_config()?;

    // Initialize logging
    logger::setup_simple_logger(app_config.log_level_filter()?)?;

    // One store for the whole process, shared by every worker
    let memory_repo = repo::memory::InMemoryRepo::default();

    configure_and_run_server(app_config, memory_repo).await
}

/// Creates application state from the provided repository
fn create_app_state(memory_repo: repo::memory::InMemoryRepo) -> front::AppState {
    front::AppState {
        repo: Box::new(memory_repo),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(
    app_config: &config::AppConfig,
    memory_repo: repo::memory::InMemoryRepo,
) -> anyhow::Result<()> {
    let server_addr = app_config.server_addr();

    let mut server = web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(memory_repo.clone()))
            .configure(front::routes::owners)
            .configure(front::routes::pets)
            .default_service(web::route().to(front::server::serve_not_found))
    });

    if let Some(workers) = app_config.web_server_workers {
        server = server.workers(workers);
    }

    log::info!(
        "server starting on {}:{}",
        app_config.web_server_host,
        app_config.web_server_port
    );

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
