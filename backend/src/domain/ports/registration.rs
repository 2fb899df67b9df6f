//! Driving port for account self-registration.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationRequest, User};

/// Domain use-case port for creating doctor and patient accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account for the requested email, password, and role.
    ///
    /// # Errors
    ///
    /// Returns a conflict [`Error`] when the email address is already
    /// registered.
    async fn register(&self, request: &RegistrationRequest) -> Result<User, Error>;
}
