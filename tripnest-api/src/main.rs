use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;
use tripnest_api::{app, AppState, HttpLimits};
use tripnest_store::{app_config::Config, seed, JsonStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripnest_api=debug,tripnest_store=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Tripnest API on port {}", config.server.port);

    let store = JsonStore::new(&config.storage.data_dir);
    tracing::info!("Using data directory {}", store.data_dir().display());

    if config.storage.seed_on_start {
        let seeded = seed::seed_missing(&store)
            .await
            .context("Failed to seed data directory")?;
        tracing::info!("Seeded {} collections", seeded.len());
    }

    let limits = HttpLimits {
        request_timeout: Duration::from_secs(config.server.request_timeout_seconds),
        body_limit_bytes: config.server.body_limit_kb * 1024,
    };
    let app = app(AppState::from_store(store, limits));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received ctrl+C signal, shutting down");
}
