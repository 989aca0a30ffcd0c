use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal::{
    self,
    unix::{signal, SignalKind},
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use fincommunity::adapters::http::{app_router, AuthState, WmtiAppState};
use fincommunity::adapters::{
    InMemoryEventBus, JwtSessionValidator, PostgresSurveyResultStore, PostgresWmtiHistoryStore,
};
use fincommunity::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            error!(error = %e, "Database connection failed");
            e
        })?;

    let state = WmtiAppState::new(
        Arc::new(PostgresSurveyResultStore::new(pool.clone())),
        Arc::new(PostgresWmtiHistoryStore::new(pool)),
        Arc::new(InMemoryEventBus::new()),
    );
    let validator: AuthState = Arc::new(JwtSessionValidator::new(config.jwt_config()));
    let app = app_router(state, validator, &config.server);

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    info!(%address, environment = ?config.server.environment, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
