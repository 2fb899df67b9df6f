//! Driving port for doctor self-service profile operations.
//!
//! Doctors never create their own profile; administrators provision the
//! account and profile together, after which the doctor may amend it.

use async_trait::async_trait;

use crate::domain::{Doctor, DoctorUpdate, Error, UserId};

/// Domain use-case port for a doctor managing their own profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorProfileCommand: Send + Sync {
    /// Apply a partial update to the calling account's profile.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request [`Error`] for an empty update and a
    /// not-found [`Error`] when no profile is provisioned for the account.
    async fn update_profile(&self, user_id: &UserId, update: DoctorUpdate)
    -> Result<Doctor, Error>;
}
