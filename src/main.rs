use std::sync::Arc;

use gridlocked::api::{AppState, app_router};
use gridlocked::config::AppConfig;
use gridlocked::latency::CommitTimer;
use gridlocked::prefs::PreferenceStore;
use gridlocked::store::{LibSqlStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    eprintln!("⚡ GridLocked v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}", config.port);
    eprintln!("   Storage: {}", config.db_path);
    eprintln!(
        "   Simulated latency: {}ms\n",
        config.simulated_latency.as_millis()
    );

    let storage: Arc<dyn Storage> = Arc::new(
        LibSqlStorage::open(std::path::Path::new(&config.db_path))
            .await
            .unwrap_or_else(|e| {
                eprintln!("Error: Failed to open storage at {}: {}", config.db_path, e);
                std::process::exit(1);
            }),
    );

    let prefs = PreferenceStore::new(storage);
    let timer = CommitTimer::new(config.simulated_latency);
    let state = AppState::new(prefs, timer);

    let app = app_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Server started");
    axum::serve(listener, app).await?;

    Ok(())
}
