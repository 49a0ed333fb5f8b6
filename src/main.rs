use anyhow::Context;
use clap::Parser;
use paisesrv::{
    api,
    cli::Args,
    config::Config,
    services::{country::CountryService, database::DatabaseService},
    AppState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Arc::new(
        Config::from_env()
            .context("Failed to load configuration")?
            .apply_args(&args),
    );

    let db_service = Arc::new(
        DatabaseService::new(
            &config.database_url,
            config.db_connection_pool_size,
            config.db_acquire_timeout(),
        )
        .await
        .context("Failed to initialize vote store")?,
    );

    let country_service = Arc::new(
        CountryService::new(&config.countries_api_url, config.upstream_timeout())
            .context("Failed to initialize country provider client")?,
    );

    let app_state = AppState {
        config: config.clone(),
        db_service: db_service.clone(),
        country_service,
    };

    let app = api::router(app_state);

    let address = config.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Draining vote store connections");
    db_service.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}
