//! Application Configuration
//!
//! Configuration for the Auth application layer, loaded once at startup.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use platform::password::HashingConfig;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ConfigError;

/// Default token lifetime (1 hour)
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

// Environment variable names
const ENV_SECRET: &str = "JWT_SECRET";
const ENV_TOKEN_LIFETIME: &str = "TOKEN_LIFETIME_SECS";
const ENV_HASH_MEMORY: &str = "PASSWORD_HASH_MEMORY_KIB";
const ENV_HASH_ITERATIONS: &str = "PASSWORD_HASH_ITERATIONS";
const ENV_HASH_PARALLELISM: &str = "PASSWORD_HASH_PARALLELISM";
const ENV_PEPPER: &str = "PASSWORD_PEPPER";

/// Token signing secret
///
/// Never empty. Wiped from memory on drop; `Debug` is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for token signatures
    pub token_secret: SigningSecret,
    /// Time from issue to expiry
    pub token_lifetime: Duration,
    /// Argon2 cost parameters and pepper
    pub hashing: HashingConfig,
}

impl AuthConfig {
    /// Config with the given secret and default lifetime/hashing cost
    pub fn new(token_secret: SigningSecret) -> Self {
        Self {
            token_secret,
            token_lifetime: DEFAULT_TOKEN_LIFETIME,
            hashing: HashingConfig::default(),
        }
    }

    /// Load from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_SECRET).ok_or(ConfigError::MissingSecret)?;
        let token_secret = SigningSecret::new(secret)?;

        let token_lifetime = match parse_var::<u64, _>(&lookup, ENV_TOKEN_LIFETIME)? {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    key: ENV_TOKEN_LIFETIME,
                    value: "0".to_string(),
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TOKEN_LIFETIME,
        };

        let defaults = HashingConfig::default();
        let hashing = HashingConfig {
            memory_kib: parse_var(&lookup, ENV_HASH_MEMORY)?.unwrap_or(defaults.memory_kib),
            iterations: parse_var(&lookup, ENV_HASH_ITERATIONS)?.unwrap_or(defaults.iterations),
            parallelism: parse_var(&lookup, ENV_HASH_PARALLELISM)?.unwrap_or(defaults.parallelism),
            pepper: lookup(ENV_PEPPER)
                .filter(|p| !p.is_empty())
                .map(String::into_bytes),
        };

        Ok(Self {
            token_secret,
            token_lifetime,
            hashing,
        })
    }
}

/// Parse an optional variable; empty counts as unset
fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        _ => Ok(None),
    }
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
        let config = AuthConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.token_secret.as_bytes(), b"s3cret");
        assert_eq!(config.token_lifetime, Duration::from_secs(3600));
        assert_eq!(config.hashing.memory_kib, HashingConfig::default().memory_kib);
        assert!(config.hashing.pepper.is_none());
    }

    #[test]
    fn test_missing_or_empty_secret() {
        assert!(matches!(
            AuthConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingSecret)
        ));
        assert!(matches!(
            AuthConfig::from_lookup(lookup(&[("JWT_SECRET", "")])),
            Err(ConfigError::MissingSecret)
        ));
    }

    #[test]
    fn test_overrides() {
        let config = AuthConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_LIFETIME_SECS", "60"),
            ("PASSWORD_HASH_MEMORY_KIB", "8192"),
            ("PASSWORD_HASH_ITERATIONS", "3"),
            ("PASSWORD_HASH_PARALLELISM", "2"),
            ("PASSWORD_PEPPER", "pepper"),
        ]))
        .unwrap();

        assert_eq!(config.token_lifetime, Duration::from_secs(60));
        assert_eq!(config.hashing.memory_kib, 8192);
        assert_eq!(config.hashing.iterations, 3);
        assert_eq!(config.hashing.parallelism, 2);
        assert_eq!(config.hashing.pepper.as_deref(), Some(&b"pepper"[..]));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = AuthConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_LIFETIME_SECS", "an hour"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "TOKEN_LIFETIME_SECS", .. }
        ));

        assert!(
            AuthConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("TOKEN_LIFETIME_SECS", "0")]))
                .is_err()
        );
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SigningSecret::new("top-secret").unwrap();
        assert!(!format!("{secret:?}").contains("top-secret"));
    }
}
