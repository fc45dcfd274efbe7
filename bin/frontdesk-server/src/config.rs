//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for frontdesk-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// SQLite (or other) database URL (default: `"sqlite://frontdesk.db"`).
    /// Supports any sqlx-compatible connection string.
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Serve the Swagger UI at `/swagger-ui`.  Disable in production to
    /// avoid exposing the API structure.
    pub enable_swagger: bool,

    /// Bearer token required by `GET /api/contact-messages`.  `None` leaves
    /// the listing open.
    pub admin_token: Option<String>,

    /// Directory with the built marketing site; served as the router
    /// fallback when set, so one process hosts both site and API.
    pub static_dir: Option<String>,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("FRONTDESK_BIND", "0.0.0.0:3000"),
            database_url: env_or("FRONTDESK_DATABASE_URL", "sqlite://frontdesk.db"),
            log_level: env_or("FRONTDESK_LOG", "info"),
            log_json: env_flag("FRONTDESK_LOG_JSON", false),
            cors_allowed_origins: std::env::var("FRONTDESK_CORS_ORIGINS").ok(),
            enable_swagger: env_flag("FRONTDESK_ENABLE_SWAGGER", true),
            admin_token: std::env::var("FRONTDESK_ADMIN_TOKEN").ok(),
            static_dir: std::env::var("FRONTDESK_STATIC_DIR").ok(),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
