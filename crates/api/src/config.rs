use kanban_core::board::{parse_column_titles, DEFAULT_BOARD_COLUMNS};

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
    /// Key for the HMAC that signs CSRF tokens.
    pub csrf_secret: Vec<u8>,
    /// Column titles every new project's board starts with.
    pub default_columns: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                 |
    /// |-------------------------|-----------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                               |
    /// | `PORT`                  | `3000`                                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                 |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                    |
    /// | `CSRF_SECRET`           | random, regenerated on every start      |
    /// | `DEFAULT_BOARD_COLUMNS` | `Backlog,Ready,Work in progress,Done`   |
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

        let csrf_secret = match std::env::var("CSRF_SECRET") {
            Ok(secret) if !secret.is_empty() => secret.into_bytes(),
            _ => {
                tracing::warn!("CSRF_SECRET not set, using a random per-process secret");
                rand::random::<[u8; 32]>().to_vec()
            }
        };

        let default_columns = std::env::var("DEFAULT_BOARD_COLUMNS")
            .map(|raw| parse_column_titles(&raw))
            .unwrap_or_else(|_| DEFAULT_BOARD_COLUMNS.iter().map(|s| s.to_string()).collect());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            csrf_secret,
            default_columns,
        }
    }
}
