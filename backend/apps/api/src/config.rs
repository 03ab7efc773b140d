//! Server Configuration
//!
//! Process-level settings read from the environment. Auth settings live in
//! `auth::AuthConfig`.

use anyhow::{Context, bail};
use axum::http::HeaderValue;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub frontend_origins: Vec<HeaderValue>,
    pub port: u16,
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL must be set in environment")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {value:?}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {value:?}"))?,
            None => DEFAULT_PORT,
        };

        let origins =
            lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());
        let frontend_origins = parse_origins(&origins)?;

        Ok(Self {
            database_url,
            max_connections,
            frontend_origins,
            port,
        })
    }
}

/// Comma-separated origin list; blanks are skipped
fn parse_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse()
                .with_context(|| format!("Invalid origin in FRONTEND_ORIGINS: {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    if origins.is_empty() {
        bail!("FRONTEND_ORIGINS must name at least one origin");
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")])).unwrap();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.port, 3000);
        assert_eq!(config.frontend_origins, vec![HeaderValue::from_static("http://localhost:3000")]);
    }

    #[test]
    fn test_database_url_required() {
        assert!(ServerConfig::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("PORT", "8080"),
            ("FRONTEND_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_origins.len(), 2);

        assert!(
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")]))
                .is_err()
        );
    }
}
