//! Argon2id password hashing adapter.
//!
//! Produces PHC-encoded hash strings, so the parameters travel with each
//! hash and verification keeps working if the defaults are tuned later.

use argon2::PasswordHasher as _;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use rand_core::OsRng;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Argon2id implementation of the password hasher port.
///
/// Uses the crate's default parameters and a fresh random salt per hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a hasher with the default Argon2id parameters.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|err| PasswordHashError::verify(err.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::verify(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hasher = Argon2PasswordHasher::new();

        let hash = hasher.hash("ward-7-secret").expect("hashing succeeds");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("ward-7-secret", &hash).expect("verify runs"));
        assert!(!hasher.verify("wrong-password", &hash).expect("verify runs"));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();

        let first = hasher.hash("ward-7-secret").expect("hashing succeeds");
        let second = hasher.hash("ward-7-secret").expect("hashing succeeds");

        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let hasher = Argon2PasswordHasher::new();

        let err = hasher
            .verify("ward-7-secret", "not-a-phc-string")
            .expect_err("malformed hash must fail");

        assert!(matches!(err, PasswordHashError::Verify { .. }));
    }
}
