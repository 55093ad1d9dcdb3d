use anyhow::Context;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service::{
    AppState,
    config::{AppConfig, Config},
    database::Database,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn init_tracing(app: &AppConfig) {
    let json = app.is_production();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&app.rust_log))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config.app);

    info!("Starting Catalog Service ({})", config.app.environment);

    let metrics = catalog_service::metrics::install_recorder()
        .context("Failed to install metrics recorder")?;

    // Connect to the database, waiting for it to come up
    let db = Database::connect_with_retry(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Database connected");

    // Create tables if they are missing
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let app_state = AppState::postgres(db, metrics);
    let app = catalog_service::app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port)
        .parse()
        .context("HOST/PORT do not form a socket address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
