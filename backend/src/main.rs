//! Usuarios entry-point: loads settings, scans the record store and serves
//! the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use usuarios::config::ServerSettings;
use usuarios::domain::UserService;
use usuarios::domain::ports::UserPersistenceError;
use usuarios::inbound::http::health::HealthState;
use usuarios::outbound::persistence::CsvUserRepository;

/// Failures that abort start-up before the listener is bound.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(String),
    #[error("failed to load user store: {0}")]
    Store(#[from] UserPersistenceError),
}

impl From<StartupError> for std::io::Error {
    fn from(err: StartupError) -> Self {
        std::io::Error::other(err)
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| StartupError::Config(e.to_string()))?;
    let data_file = settings.data_file();
    let repo = Arc::new(CsvUserRepository::new(data_file.clone()));
    let service = UserService::bootstrap(repo)
        .await
        .map_err(StartupError::from)?;

    let bind_addr = settings.bind_addr();
    info!(
        host = %bind_addr.0,
        port = bind_addr.1,
        data_file = %data_file.display(),
        "starting usuarios server"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(service)),
    )?;
    let result = server.await;
    health_state.mark_draining();
    result
}
