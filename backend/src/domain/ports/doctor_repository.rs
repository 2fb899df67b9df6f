//! Port abstraction for doctor profile persistence.

use async_trait::async_trait;

use crate::domain::{Doctor, DoctorId, DoctorUpdate, EmailAddress, NewDoctorProfile, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by doctor repository adapters.
    pub enum DoctorPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "doctor repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "doctor repository query failed: {message}",
        /// The owning account already has a doctor profile.
        DuplicateProfile => "doctor profile already exists for this account",
        /// Another account already owns the requested email address.
        DuplicateEmail => "email address already registered",
    }
}

/// A doctor profile joined with the owning account's email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRecord {
    pub doctor: Doctor,
    pub email: EmailAddress,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Insert an account and its profile in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`DoctorPersistenceError::DuplicateEmail`] when the email
    /// address is already taken; neither row is written in that case.
    async fn create_with_account(
        &self,
        email: &EmailAddress,
        password_hash: &str,
        profile: &NewDoctorProfile,
    ) -> Result<DoctorId, DoctorPersistenceError>;

    /// Fetch a profile by its identifier.
    async fn find(&self, id: DoctorId) -> Result<Option<DoctorRecord>, DoctorPersistenceError>;

    /// Fetch the profile owned by an account.
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<DoctorRecord>, DoctorPersistenceError>;

    /// Apply a partial update to a profile and return the new state.
    ///
    /// Resolves to `None` when no profile matches the identifier.
    async fn update(
        &self,
        id: DoctorId,
        update: &DoctorUpdate,
    ) -> Result<Option<Doctor>, DoctorPersistenceError>;

    /// Apply a partial update to the profile owned by an account.
    async fn update_by_user(
        &self,
        user_id: &UserId,
        update: &DoctorUpdate,
    ) -> Result<Option<Doctor>, DoctorPersistenceError>;

    /// Delete a profile together with its owning account.
    ///
    /// Returns `false` when no profile matched the identifier.
    async fn delete(&self, id: DoctorId) -> Result<bool, DoctorPersistenceError>;

    /// Case-insensitive substring search over name, specialisation, and
    /// account email.
    async fn search(&self, term: &str) -> Result<Vec<DoctorRecord>, DoctorPersistenceError>;

    /// Count all doctor profiles.
    async fn count(&self) -> Result<i64, DoctorPersistenceError>;
}
