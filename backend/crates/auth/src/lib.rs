//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the account directory trait
//! - `application/` - Configuration, token service, sign up / sign in use cases
//! - `infra/` - PostgreSQL and in-memory directories
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Account sign up with name, email and password
//! - Sign in returning a signed, expiring bearer token (HS256, 1 hour default)
//! - Middleware and extractor resolving the caller from `Authorization: Bearer`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool, optional pepper
//! - Unknown-email sign in burns a dummy verification
//! - Unknown email and wrong password produce the same error
//! - Tokens are stateless; there is no revocation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{AuthConfig, TokenService};
pub use domain::entity::RequestIdentity;
pub use error::{AuthError, ConfigError, DirectoryError, SigninError, SignupError};
pub use infra::{InMemoryAccountDirectory, PgAccountDirectory};
pub use presentation::middleware::{authenticate, require_bearer};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
