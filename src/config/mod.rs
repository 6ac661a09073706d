use std::env;
use std::path::PathBuf;

/// File name of the catalog database when `DATABASE_URL` is not set.
pub const DEFAULT_DB_FILE: &str = "archive.db";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Store connection string (default: `archive.db` next to the executable)
    pub database_url: String,

    /// Maximum pooled store connections (default: 10)
    pub max_connections: u32,

    /// Allowed CORS origins. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: 10,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(default.database_url),

            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default.max_connections),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(default.allowed_origins),
        }
    }

    /// In-memory store, open CORS. Used by tests and local experiments.
    pub fn development() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            allowed_origins: Vec::new(),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

/// Resolves `archive.db` in the directory holding the running executable, so the
/// server and the seed binary agree on one file without extra configuration.
pub fn default_database_url() -> String {
    let dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    sqlite_url_for(&dir.join(DEFAULT_DB_FILE))
}

pub fn sqlite_url_for(path: &std::path::Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.iter().any(|o| o == "*") {
        return Vec::new();
    }
    origins
}
