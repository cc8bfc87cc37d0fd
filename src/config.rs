//! Configuration types.

use std::time::Duration;

/// App configuration, read from the environment with sensible defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP API binds to.
    pub port: u16,
    /// Path to the local storage database file.
    pub db_path: String,
    /// Artificial delay applied before auth/onboarding commits, to simulate
    /// network latency. Zero disables the delay (used by tests).
    pub simulated_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            db_path: "./data/gridlocked.db".to_string(),
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

impl AppConfig {
    /// Build a config from `GRIDLOCKED_*` environment variables, falling back
    /// to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("GRIDLOCKED_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let db_path = std::env::var("GRIDLOCKED_DB_PATH").unwrap_or(defaults.db_path);

        let simulated_latency = std::env::var("GRIDLOCKED_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.simulated_latency);

        Self {
            port,
            db_path,
            simulated_latency,
        }
    }
}
