use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Cadence of the sidebar messaging refresh task (default: `30`).
    pub messaging_refresh_secs: u64,
    /// Backing file for the favorites id set (default: `favorites.json`).
    pub favorites_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `MESSAGING_REFRESH_SECS` | `30`                       |
    /// | `FAVORITES_PATH`         | `favorites.json`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let messaging_refresh_secs: u64 = std::env::var("MESSAGING_REFRESH_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("MESSAGING_REFRESH_SECS must be a valid u64");

        let favorites_path =
            PathBuf::from(std::env::var("FAVORITES_PATH").unwrap_or_else(|_| "favorites.json".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            messaging_refresh_secs,
            favorites_path,
        }
    }
}
