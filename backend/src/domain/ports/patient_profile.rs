//! Driving port for patient self-service profile operations.

use async_trait::async_trait;

use crate::domain::{Error, NewPatientProfile, Patient, PatientUpdate, UserId};

/// Domain use-case port for a patient managing their own profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientProfileCommand: Send + Sync {
    /// Create the profile attached to the calling account.
    ///
    /// # Errors
    ///
    /// Returns a conflict [`Error`] when the account already has a profile.
    async fn create_profile(
        &self,
        user_id: &UserId,
        profile: NewPatientProfile,
    ) -> Result<Patient, Error>;

    /// Apply a partial update to the calling account's profile.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request [`Error`] for an empty update and a
    /// not-found [`Error`] when the account has no profile yet.
    async fn update_profile(
        &self,
        user_id: &UserId,
        update: PatientUpdate,
    ) -> Result<Patient, Error>;
}
