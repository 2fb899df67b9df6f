//! Port abstraction for password hashing.
//!
//! Kept synchronous: hashing cost is bounded and the adapters carry no I/O.

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Hashing a new password failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed or checked.
        Verify { message: String } => "password verification failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError::Hash`] when the underlying algorithm
    /// rejects its inputs.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Resolves to `false` on mismatch; errors are reserved for hashes the
    /// adapter cannot parse.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError::Verify`] when the stored hash is
    /// malformed.
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordHashError>;
}
