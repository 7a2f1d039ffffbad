use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia_api::{
    config::{init_config, Config, LogFormat, StorageKind},
    database::{
        pool::{create_pool, run_migrations},
        MemoryTriviaStore, PgTriviaStore, TriviaStore,
    },
    routes, AppState,
};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn TriviaStore>> {
    match config.storage {
        StorageKind::Postgres => {
            let pool = create_pool(config).await?;
            run_migrations(&pool).await?;
            info!("Connected to postgres, migrations applied");
            Ok(Arc::new(PgTriviaStore::new(pool)))
        }
        StorageKind::Memory => {
            info!("Using in-memory storage; data is lost on shutdown");
            Ok(Arc::new(MemoryTriviaStore::seeded(
                MemoryTriviaStore::default_categories(),
                Vec::new(),
            )))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = init_config()?;
    init_tracing(config.log_format);

    let store = build_store(config).await?;
    let app = routes::router(AppState::new(store), config.body_limit_bytes);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
