use std::path::PathBuf;
use std::str::FromStr;

use fintrack_core::routing::{
    parse_route_list, RouteTable, DEFAULT_AUTH_ROUTES, DEFAULT_PROTECTED_ROUTES,
    DEFAULT_PUBLIC_ROUTES,
};

/// Default session lifetime in days.
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Longest session lifetime accepted from the environment.
pub const MAX_SESSION_TTL_DAYS: i64 = 3650;

/// Configuration errors detected at startup. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// Directory holding the pre-built page bundle (default: `public`).
    pub static_dir: PathBuf,
    /// Page route lists consulted by the route guard.
    pub routes: RouteTable,
    /// Session token and cookie settings.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `public`                   |
    /// | `PROTECTED_ROUTES`     | `/dashboard,/income,...`   |
    /// | `PUBLIC_ROUTES`        | `/login,/signup,/`         |
    /// | `AUTH_ROUTES`          | `/login,/signup`           |
    ///
    /// Session settings are read by [`SessionConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_env("PORT", 3000u16)?;
        let cors_origins = parse_route_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30u64)?;
        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()));

        let routes = RouteTable {
            protected: route_list_env("PROTECTED_ROUTES", DEFAULT_PROTECTED_ROUTES),
            public: route_list_env("PUBLIC_ROUTES", DEFAULT_PUBLIC_ROUTES),
            auth_only: route_list_env("AUTH_ROUTES", DEFAULT_AUTH_ROUTES),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            routes,
            session: SessionConfig::from_env()?,
        })
    }
}

/// Settings shared by the token codec and the session cookie.
#[derive(Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub secret: String,
    /// Session lifetime in days; also the cookie's expiry window.
    pub ttl_days: i64,
    /// Whether the cookie carries the `Secure` attribute.
    pub secure_cookies: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl_days", &self.ttl_days)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var            | Required | Default       |
    /// |--------------------|----------|---------------|
    /// | `SESSION_SECRET`   | **yes**  | --            |
    /// | `SESSION_TTL_DAYS` | no       | `7`           |
    /// | `APP_ENV`          | no       | `development` |
    ///
    /// Cookies are marked `Secure` when `APP_ENV` is `production`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret =
            std::env::var("SESSION_SECRET").map_err(|_| ConfigError::Missing("SESSION_SECRET"))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::Empty("SESSION_SECRET"));
        }

        let ttl_days = check_ttl_days(parse_env("SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?)?;

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        Ok(Self {
            secret,
            ttl_days,
            secure_cookies: app_env == "production",
        })
    }
}

/// Session lifetimes must fall within `1..=MAX_SESSION_TTL_DAYS`.
fn check_ttl_days(ttl_days: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_SESSION_TTL_DAYS).contains(&ttl_days) {
        Ok(ttl_days)
    } else {
        Err(ConfigError::Invalid {
            var: "SESSION_TTL_DAYS",
            value: ttl_days.to_string(),
        })
    }
}

/// Parse an optional env var, falling back to `default` when unset.
fn parse_env<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn route_list_env(var: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(var) {
        Ok(raw) => parse_route_list(&raw),
        Err(_) => default.iter().map(|r| (*r).to_string()).collect(),
    }
}

/// The Postgres connection string. Kept out of [`ServerConfig`] so it never
/// reaches a `Debug` log line.
pub fn database_url_from_env() -> Result<String, ConfigError> {
    let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
    if url.trim().is_empty() {
        return Err(ConfigError::Empty("DATABASE_URL"));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secret() {
        let config = SessionConfig {
            secret: "super-secret-value".into(),
            ttl_days: 7,
            secure_cookies: true,
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("ttl_days: 7"));
    }

    #[test]
    fn ttl_days_bounds() {
        assert_eq!(check_ttl_days(1).unwrap(), 1);
        assert_eq!(check_ttl_days(MAX_SESSION_TTL_DAYS).unwrap(), MAX_SESSION_TTL_DAYS);
        for bad in [0, -3, MAX_SESSION_TTL_DAYS + 1, 200_000_000_000_000] {
            let err = check_ttl_days(bad).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { var: "SESSION_TTL_DAYS", .. }),
                "{bad} should be rejected"
            );
        }
    }
}
