use std::time::Duration;

use marquee_db::PoolSettings;

/// A configuration variable that is missing or cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Connection pool sizing.
    pub pool: PoolSettings,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Apply embedded migrations before serving (default: `true`).
    pub run_migrations: bool,
    /// Emit JSON log lines instead of human-readable text.
    pub log_json: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `8000`                  |
    /// | `DATABASE_URL`            | required                |
    /// | `DB_MIN_CONNECTIONS`      | `1`                     |
    /// | `DB_MAX_CONNECTIONS`      | `10`                    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `RUN_MIGRATIONS`          | `true`                  |
    /// | `LOG_FORMAT`              | `text`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 8000u16)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let defaults = PoolSettings::default();
        let min_connections = parse_var(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?;
        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 || min_connections > max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: max_connections.to_string(),
            });
        }
        let acquire_timeout_secs = parse_var(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let run_migrations = parse_var(&lookup, "RUN_MIGRATIONS", true)?;

        let log_json = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => false,
            Some("json") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            database_url,
            pool: PoolSettings {
                min_connections,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            cors_origins,
            request_timeout_secs,
            run_migrations,
            log_json,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        _ => Ok(default),
    }
}
