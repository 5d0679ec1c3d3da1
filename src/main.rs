//! # SMS OTP Inbox
//!
//! Main entry point for the SMS inbox web application: receives delivery
//! notifications from the SMS provider webhook, stores them in SQLite and
//! serves the operator dashboard.

pub mod api;
pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod models;
pub mod repo;
pub mod utils;
pub mod webhook;

use anyhow::Context;
use log::info;
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = &*config::APP_CONFIG;
    info!(
        "starting sms-inbox (env: {env}, db: {db})",
        env = app_config.env,
        db = app_config.db_host
    );

    // Initialize database connection pool and make sure the sms table exists
    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool().await?,
    };
    sqlite_repo
        .init_schema()
        .await
        .context("failed to initialize the sms schema")?;

    configure_and_run_server(sqlite_repo).await
}

/// Creates application state from the provided repository
fn create_app_state(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> front::AppState {
    front::AppState {
        repo: Box::new(sqlite_repo),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;
    let server_addr = (app_config.web_server_host.as_str(), app_config.web_server_port);

    let server = web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state(sqlite_repo.clone()))
            .service((front::inbox::index, front::server::health))
            .service(web::scope("/webhook/sms").service((webhook::sms::receive,)))
            .default_service(web::route().to(front::server::serve_not_found))
    });

    info!("server listening on {}", app_config.base_url());

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))
}
