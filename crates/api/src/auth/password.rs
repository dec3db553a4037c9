//! Password hashing and the registration strength rule.
//!
//! Passwords are hashed with Argon2id and a fresh [`OsRng`] salt. Storage is
//! the PHC string format, which carries the algorithm, its parameters, and
//! the salt alongside the digest, so old hashes stay verifiable if defaults
//! move.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password into a PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; `Err` means the stored hash itself is
/// malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Enforce [`MIN_PASSWORD_LENGTH`], returning a client-facing message on
/// failure.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.len() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ))
    }
}
