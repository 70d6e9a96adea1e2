//! SocietyHub Server — Residential Society Management Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use societyhub_core::config::AppConfig;
use societyhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SOCIETYHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SocietyHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = societyhub_database::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    societyhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let alert_repo = Arc::new(
        societyhub_database::repositories::alert::AlertRepository::new(db_pool.clone()),
    );
    let notification_repo = Arc::new(
        societyhub_database::repositories::notification::NotificationRepository::new(
            db_pool.clone(),
        ),
    );
    let visitor_repo = Arc::new(
        societyhub_database::repositories::visitor::VisitorRepository::new(db_pool.clone()),
    );

    // ── Step 3: Live feed ────────────────────────────────────────
    let hub = Arc::new(societyhub_realtime::hub::NotificationHub::new(
        config.realtime.channel_buffer_size,
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let alert_service = Arc::new(societyhub_service::alert::service::AlertService::new(
        Arc::clone(&alert_repo),
    ));
    let notification_service = Arc::new(
        societyhub_service::notification::service::NotificationService::new(
            Arc::clone(&notification_repo),
            Arc::clone(&visitor_repo),
            Arc::clone(&hub),
            config.realtime.notifications.history_limit,
        ),
    );

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = societyhub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        hub,
        alert_repo,
        notification_repo,
        visitor_repo,
        alert_service,
        notification_service,
    };

    let app = societyhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("SocietyHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("SocietyHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
