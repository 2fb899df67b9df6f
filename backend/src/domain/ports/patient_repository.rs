//! Port abstraction for patient profile persistence.
//!
//! Patient rows always hang off a user account. Reads join the owning
//! account so callers get the contact email without a second round trip.

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewPatientProfile, Patient, PatientId, PatientUpdate, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by patient repository adapters.
    pub enum PatientPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "patient repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "patient repository query failed: {message}",
        /// The owning account already has a patient profile.
        DuplicateProfile => "patient profile already exists for this account",
        /// Another account already owns the requested email address.
        DuplicateEmail => "email address already registered",
    }
}

/// A patient profile joined with the owning account's email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub patient: Patient,
    pub email: EmailAddress,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Insert a profile for an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`PatientPersistenceError::DuplicateProfile`] when the account
    /// already has one.
    async fn create_profile(
        &self,
        user_id: &UserId,
        profile: &NewPatientProfile,
    ) -> Result<Patient, PatientPersistenceError>;

    /// Insert an account and its profile in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PatientPersistenceError::DuplicateEmail`] when the email
    /// address is already taken; neither row is written in that case.
    async fn create_with_account(
        &self,
        email: &EmailAddress,
        password_hash: &str,
        profile: &NewPatientProfile,
    ) -> Result<PatientId, PatientPersistenceError>;

    /// Fetch a profile by its identifier.
    async fn find(&self, id: PatientId) -> Result<Option<PatientRecord>, PatientPersistenceError>;

    /// Fetch the profile owned by an account.
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PatientRecord>, PatientPersistenceError>;

    /// Apply a partial update to a profile and return the new state.
    ///
    /// Resolves to `None` when no profile matches the identifier.
    async fn update(
        &self,
        id: PatientId,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, PatientPersistenceError>;

    /// Apply a partial update to the profile owned by an account.
    async fn update_by_user(
        &self,
        user_id: &UserId,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, PatientPersistenceError>;

    /// Delete a profile together with its owning account.
    ///
    /// Returns `false` when no profile matched the identifier.
    async fn delete(&self, id: PatientId) -> Result<bool, PatientPersistenceError>;

    /// Case-insensitive substring search over name, contact, and account
    /// email.
    async fn search(&self, term: &str) -> Result<Vec<PatientRecord>, PatientPersistenceError>;

    /// Count all patient profiles.
    async fn count(&self) -> Result<i64, PatientPersistenceError>;
}
