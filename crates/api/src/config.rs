//! Server configuration.

use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server, read once at startup.
///
/// Everything except the JWT secret has a default that works for local
/// development; deployments override through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Origins the CORS layer will admit.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Directory uploaded images are written to and served from.
    pub uploads_dir: PathBuf,
    /// Token signing settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Assemble the configuration from environment variables.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `UPLOADS_DIR`          | `uploads`               |
    ///
    /// `CORS_ORIGINS` takes a comma-separated list; blank entries are
    /// dropped. Panics on values that do not parse, same as a missing
    /// `JWT_SECRET`.
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a valid u16"),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
            uploads_dir: PathBuf::from(env_or("UPLOADS_DIR", "uploads")),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
