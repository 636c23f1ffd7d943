use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use car_dealership::config::{DatabaseConfig, EnvironmentConfig};
use car_dealership::database::DatabaseConnection;
use car_dealership::repositories::Repositories;
use car_dealership::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("Car dealership backend ({})", config.environment);

    let repositories = match DatabaseConfig::from_env()? {
        Some(database) => {
            let connection = DatabaseConnection::connect(&database).await?;
            if config.run_migrations {
                connection.migrate().await?;
            }
            Repositories::postgres(connection.pool())
        }
        None => {
            warn!("DATABASE_URL is not set, data is kept in memory only");
            Repositories::in_memory()
        }
    };

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.server_url()))?;

    let app = create_app(AppState::new(config, repositories));

    info!("Listening on http://{}", addr);
    info!("Resources under /api/v1: addresses, clients, comments, departments, locations, lots, managers, mechanics, associates, tickets");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}
