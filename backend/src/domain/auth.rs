//! Authentication primitives such as login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::email::{EmailAddress, EmailValidationError};
use crate::domain::role::Role;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or malformed.
    InvalidEmail(EmailValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(err) => write!(f, "{err}"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is normalised per [`EmailAddress`].
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use hms_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Admin@Hospital.example", "pw").unwrap();
/// assert_eq!(creds.email().as_ref(), "admin@hospital.example");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = EmailAddress::new(email).map_err(CredentialsValidationError::InvalidEmail)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address suitable for user lookups.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain error returned when a registration payload is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Email was missing or malformed.
    InvalidEmail(EmailValidationError),
    /// Password was blank.
    EmptyPassword,
    /// Role string is not a known role.
    InvalidRole,
    /// Admin accounts come from the bootstrap credential, not registration.
    AdminRoleReserved,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(err) => write!(f, "{err}"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::InvalidRole => write!(f, "role must be one of doctor or patient"),
            Self::AdminRoleReserved => {
                write!(f, "admin accounts cannot be created through registration")
            }
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Validated self-registration request.
///
/// ## Invariants
/// - `role` is doctor or patient; the admin role is reserved for the
///   bootstrap credential path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    email: EmailAddress,
    password: Zeroizing<String>,
    role: Role,
}

impl RegistrationRequest {
    /// Construct a registration request from raw string inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let email = EmailAddress::new(email).map_err(RegistrationValidationError::InvalidEmail)?;
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        let role: Role = role
            .parse()
            .map_err(|_| RegistrationValidationError::InvalidRole)?;
        if role == Role::Admin {
            return Err(RegistrationValidationError::AdminRoleReserved);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
            role,
        })
    }

    /// Email address to register.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password to be hashed before storage.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Requested account role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}
