//! Authentication domain services.
//!
//! One service implements the login, registration, and identity driving
//! ports over the user repository and the password hasher.

use std::sync::Arc;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{
    IdentityQuery, LoginService, PasswordHasher, RegistrationService, UserPersistenceError,
    UserRepository,
};
use crate::domain::service_support::map_hasher_error;
use crate::domain::{
    EmailAddress, Error, LoginCredentials, RegistrationRequest, Role, User, UserId,
};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail => Error::conflict("email address already registered"),
    }
}

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid credentials")
}

/// Configured first-run administrator credential.
///
/// Only consulted while no account exists for its email address; once the
/// admin account is stored, the stored hash is the sole authority and
/// changing this configuration has no effect on login.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl BootstrapAdmin {
    /// Pair the configured admin email with its plaintext password.
    #[must_use]
    pub fn new(email: EmailAddress, password: impl Into<String>) -> Self {
        Self {
            email,
            password: Zeroizing::new(password.into()),
        }
    }

    fn matches(&self, credentials: &LoginCredentials) -> bool {
        &self.email == credentials.email() && self.password.as_str() == credentials.password()
    }
}

/// Account service implementing the authentication driving ports.
#[derive(Clone)]
pub struct AuthService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
    bootstrap: BootstrapAdmin,
}

impl<R, H> AuthService<R, H> {
    /// Create a new service over the user repository and password hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>, bootstrap: BootstrapAdmin) -> Self {
        Self {
            users,
            hasher,
            bootstrap,
        }
    }
}

impl<R, H> AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    fn verify_stored(&self, password: &str, stored_hash: &str) -> Result<(), Error> {
        let matched = self
            .hasher
            .verify(password, stored_hash)
            .map_err(map_hasher_error)?;
        if matched { Ok(()) } else { Err(invalid_credentials()) }
    }

    /// Mint the admin account on the first login with the bootstrap credential.
    ///
    /// A concurrent first login can hit the unique email constraint; the
    /// loser of that race re-reads the freshly stored account and verifies
    /// against its hash like any other login.
    async fn bootstrap_admin(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let hash = self
            .hasher
            .hash(credentials.password())
            .map_err(map_hasher_error)?;

        match self
            .users
            .insert(credentials.email(), &hash, Role::Admin)
            .await
        {
            Ok(user) => Ok(user),
            Err(UserPersistenceError::DuplicateEmail) => {
                let stored = self
                    .users
                    .find_by_email(credentials.email())
                    .await
                    .map_err(map_repository_error)?
                    .ok_or_else(|| {
                        Error::internal("admin account disappeared during race resolution")
                    })?;
                self.verify_stored(credentials.password(), stored.password_hash())?;
                Ok(stored.into_user())
            }
            Err(err) => Err(map_repository_error(err)),
        }
    }
}

#[async_trait]
impl<R, H> LoginService for AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let stored = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_repository_error)?;

        match stored {
            Some(stored) => {
                self.verify_stored(credentials.password(), stored.password_hash())?;
                Ok(stored.into_user())
            }
            None if self.bootstrap.matches(credentials) => {
                self.bootstrap_admin(credentials).await
            }
            None => Err(invalid_credentials()),
        }
    }
}

#[async_trait]
impl<R, H> RegistrationService for AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, request: &RegistrationRequest) -> Result<User, Error> {
        let hash = self
            .hasher
            .hash(request.password())
            .map_err(map_hasher_error)?;

        self.users
            .insert(request.email(), &hash, request.role())
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R, H> IdentityQuery for AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(id).await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
