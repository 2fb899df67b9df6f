//! Port abstraction for account persistence adapters and their errors.
//!
//! Adapters own identifier generation and creation timestamps; callers hand
//! over validated credentials and receive fully formed [`User`] values.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Role, StoredUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already owns the requested email address.
        DuplicateEmail => "email address already registered",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserPersistenceError::DuplicateEmail`] when the email
    /// address is already taken.
    async fn insert(
        &self,
        email: &EmailAddress,
        password_hash: &str,
        role: Role,
    ) -> Result<User, UserPersistenceError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch an account together with its stored password hash by email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredUser>, UserPersistenceError>;
}
