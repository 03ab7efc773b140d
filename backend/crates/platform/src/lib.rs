//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no business vocabulary:
//! - Cryptographic utilities (HMAC-SHA256, base64url, secure randomness)
//! - Password hashing (Argon2id, PHC strings, zeroized plaintext)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
