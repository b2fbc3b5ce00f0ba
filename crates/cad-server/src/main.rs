//! Cadastro Server
//!
//! Serves the users API over HTTP, backed by PostgreSQL or, with
//! `--memory`, by a process-local store.

use std::sync::Arc;

use anyhow::Context;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cad_api::AppState;
use cad_core::config::AppConfig;
use cad_db::{Database, DatabaseConfig, DynUserRepository, InMemoryUserRepository, UserRepository};

mod health;

use health::{HealthChecker, HealthConfig};

#[derive(Parser, Debug)]
#[command(name = "cadastro-server")]
#[command(about = "HTTP server for Cadastro")]
#[command(version)]
struct Args {
    /// Keep users in process memory instead of PostgreSQL
    #[arg(long, env = "CADASTRO_MEMORY_STORE")]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = AppConfig::from_env().context("invalid configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        memory = args.memory,
        "Starting Cadastro"
    );

    let (users, database) = open_store(&config, args.memory).await?;
    let health = HealthChecker::new(HealthConfig::default()).with_database(database.clone());

    let app = build_router(
        AppState::new(users),
        Arc::new(health),
        config.server.max_body_size_bytes,
    );

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }
    info!("Server shutdown complete");
    Ok(())
}

/// Open the user store; a database that cannot be reached is fatal
async fn open_store(
    config: &AppConfig,
    memory: bool,
) -> anyhow::Result<(DynUserRepository, Option<Database>)> {
    if memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        return Ok((Arc::new(InMemoryUserRepository::new()), None));
    }

    let db = Database::connect(&DatabaseConfig::from_app_config(config))
        .await
        .context("failed to connect to database")?;
    info!("Connected to database");

    if config.database.run_migrations {
        db.migrate().await.context("failed to run migrations")?;
    }

    let users: DynUserRepository = Arc::new(UserRepository::new(db.pool().clone()));
    Ok((users, Some(db)))
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,cad_server=debug,cad_api=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Build the application router
fn build_router(state: AppState, health: Arc<HealthChecker>, max_body_bytes: usize) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(health);

    Router::new()
        .merge(health_routes)
        .merge(cad_api::router().with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
