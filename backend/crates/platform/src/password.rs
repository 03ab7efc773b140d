//! Password Hashing and Verification
//!
//! - Argon2id hashing with tunable cost, encoded as a PHC string so the salt
//!   and parameters travel with the digest
//! - Constant-time verification (inside the argon2 crate)
//! - Zeroization of clear text and pepper material
//! - Optional application-wide pepper
//! - A dummy verification of equal cost for lookups that found no account
//!
//! Hashing is CPU bound. Inside an async executor use the `*_blocking`
//! variants, which move the work onto tokio's blocking pool.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use argon2::password_hash::{
    self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{random_bytes, to_base64url};

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashingError {
    /// Nothing to hash
    #[error("Password must not be empty")]
    EmptyInput,

    /// Cost parameters rejected by Argon2 (e.g. memory below 8 KiB per lane)
    #[error("Invalid password hashing parameters: {0}")]
    InvalidParams(String),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a usable PHC string
    #[error("Invalid password hash format")]
    MalformedHash,

    /// The blocking task running the hash was cancelled or panicked
    #[error("Password hashing worker failed: {0}")]
    Worker(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Argon2id cost parameters and optional pepper
#[derive(Clone)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
    /// Application-wide secret appended to every password
    pub pepper: Option<Vec<u8>>,
}

impl Default for HashingConfig {
    /// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
            pepper: None,
        }
    }
}

impl fmt::Debug for HashingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashingConfig")
            .field("memory_kib", &self.memory_kib)
            .field("iterations", &self.iterations)
            .field("parallelism", &self.parallelism)
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// The input is NFKC-normalized so that visually identical passwords typed
/// on different keyboards hash identically.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Result<Self, HashingError> {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();

        if normalized.is_empty() {
            return Err(HashingError::EmptyInput);
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored PHC string (e.g. from the database)
    ///
    /// The encoding is checked lazily by [`PasswordHasher::verify`], which
    /// reports a corrupt value as [`HashingError::MalformedHash`].
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id password hasher
///
/// Holds only immutable state, so one instance is shared (`Arc`) by every
/// request.
pub struct PasswordHasher {
    params: Params,
    pepper: Option<Zeroizing<Vec<u8>>>,
    /// Hash of a random password, verified against when no account matched
    dummy: HashedPassword,
    dummy_runs: AtomicU64,
}

impl PasswordHasher {
    pub fn new(config: &HashingConfig) -> Result<Self, HashingError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| HashingError::InvalidParams(e.to_string()))?;

        let mut hasher = Self {
            params,
            pepper: config.pepper.clone().map(Zeroizing::new),
            dummy: HashedPassword::from_stored(String::new()),
            dummy_runs: AtomicU64::new(0),
        };

        let decoy = ClearTextPassword::new(to_base64url(&random_bytes(24)))?;
        hasher.dummy = hasher.hash(&decoy)?;

        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn peppered(&self, password: &ClearTextPassword) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(password.as_bytes().to_vec());
        if let Some(pepper) = &self.pepper {
            bytes.extend_from_slice(pepper);
        }
        bytes
    }

    /// Hash with a fresh 128-bit salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, HashingError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(&self.peppered(password), &salt)
            .map_err(|e| HashingError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Verify against a stored hash using the salt and cost embedded in it
    ///
    /// A mismatch is `Ok(false)`; only an unusable stored hash is an error.
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        stored: &HashedPassword,
    ) -> Result<bool, HashingError> {
        let parsed =
            PasswordHash::new(&stored.hash).map_err(|_| HashingError::MalformedHash)?;

        match self.argon2().verify_password(&self.peppered(password), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(_) => Err(HashingError::MalformedHash),
        }
    }

    /// Spend the cost of one verification without a real account
    pub fn verify_dummy(&self, password: &ClearTextPassword) {
        let _ = self.verify(password, &self.dummy);
        self.dummy_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of dummy verifications performed so far
    pub fn dummy_verifications(&self) -> u64 {
        self.dummy_runs.load(Ordering::Relaxed)
    }

    // ------------------------------------------------------------------------
    // Blocking-pool variants
    // ------------------------------------------------------------------------

    pub async fn hash_blocking(
        self: Arc<Self>,
        password: ClearTextPassword,
    ) -> Result<HashedPassword, HashingError> {
        tokio::task::spawn_blocking(move || self.hash(&password))
            .await
            .map_err(|e| HashingError::Worker(e.to_string()))?
    }

    pub async fn verify_blocking(
        self: Arc<Self>,
        password: ClearTextPassword,
        stored: HashedPassword,
    ) -> Result<bool, HashingError> {
        tokio::task::spawn_blocking(move || self.verify(&password, &stored))
            .await
            .map_err(|e| HashingError::Worker(e.to_string()))?
    }

    pub async fn verify_dummy_blocking(self: Arc<Self>, password: ClearTextPassword) {
        if let Err(e) = tokio::task::spawn_blocking(move || self.verify_dummy(&password)).await {
            tracing::warn!(error = %e, "Dummy password verification did not complete");
        }
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("params", &self.params)
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .field("dummy_verifications", &self.dummy_verifications())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
