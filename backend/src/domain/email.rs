//! Email address value object used as the login identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`EmailAddress`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// The address was missing or blank once trimmed.
    Empty,
    /// The address does not look like `local@domain`.
    Malformed,
    /// The address exceeds the storage limit.
    TooLong { max: usize },
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::Malformed => write!(f, "email must look like local@domain"),
            Self::TooLong { max } => write!(f, "email must be at most {max} characters"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Maximum accepted email length.
pub const EMAIL_MAX: usize = 254;

/// Normalised email address.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and lowercased, so lookups are
///   case-insensitive.
/// - Contains exactly one `@` with non-empty local and domain parts.
///
/// # Examples
/// ```
/// use hms_backend::domain::EmailAddress;
///
/// let email = EmailAddress::new("Admin@Hospital.example").unwrap();
/// assert_eq!(email.as_ref(), "admin@hospital.example");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        Self::from_owned(email.as_ref().to_owned())
    }

    fn from_owned(email: String) -> Result<Self, EmailValidationError> {
        let normalized = email.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if normalized.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong { max: EMAIL_MAX });
        }

        let mut parts = normalized.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(normalized))
            }
            _ => Err(EmailValidationError::Malformed),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
