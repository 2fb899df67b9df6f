//! Patient profile model and its validated field types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;

/// Validation errors for patient profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientValidationError {
    /// Age must fall within the accepted range.
    AgeOutOfRange { min: i32, max: i32 },
    /// Gender string is not a recognised value.
    UnknownGender,
    /// Contact may contain digits only.
    ContactNotDigits,
    /// Contact length must fall within the accepted range.
    ContactLength { min: usize, max: usize },
}

impl fmt::Display for PatientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeOutOfRange { min, max } => {
                write!(f, "age must be between {min} and {max}")
            }
            Self::UnknownGender => write!(f, "gender must be male, female, or other"),
            Self::ContactNotDigits => write!(f, "contact must contain digits only"),
            Self::ContactLength { min, max } => {
                write!(f, "contact must be {min} to {max} digits")
            }
        }
    }
}

impl std::error::Error for PatientValidationError {}

/// Identifier of a patient profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(Uuid);

impl PatientId {
    /// Wrap an already-parsed UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum accepted patient age.
pub const AGE_MIN: i32 = 0;
/// Maximum accepted patient age.
pub const AGE_MAX: i32 = 120;

/// Patient age restricted to a plausible human range.
///
/// # Examples
/// ```
/// use hms_backend::domain::PatientAge;
///
/// assert!(PatientAge::new(120).is_ok());
/// assert!(PatientAge::new(121).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PatientAge(i32);

impl PatientAge {
    /// Validate and construct an age value.
    pub fn new(value: i32) -> Result<Self, PatientValidationError> {
        if (AGE_MIN..=AGE_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PatientValidationError::AgeOutOfRange {
                min: AGE_MIN,
                max: AGE_MAX,
            })
        }
    }

    /// The validated age.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PatientAge {
    type Error = PatientValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatientAge> for i32 {
    fn from(value: PatientAge) -> Self {
        value.0
    }
}

/// Patient gender, parsed case-insensitively and stored capitalised.
///
/// # Examples
/// ```
/// use hms_backend::domain::Gender;
///
/// let gender: Gender = "MALE".parse().unwrap();
/// assert_eq!(gender.as_str(), "Male");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Capitalised storage and display form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = PatientValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(PatientValidationError::UnknownGender),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = PatientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_owned()
    }
}

/// Minimum accepted contact number length.
pub const CONTACT_MIN: usize = 8;
/// Maximum accepted contact number length.
pub const CONTACT_MAX: usize = 15;

/// Patient contact number: digits only, within a fixed length range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Validate and construct a contact number.
    pub fn new(contact: impl AsRef<str>) -> Result<Self, PatientValidationError> {
        Self::from_owned(contact.as_ref().to_owned())
    }

    fn from_owned(contact: String) -> Result<Self, PatientValidationError> {
        if !contact.chars().all(|c| c.is_ascii_digit()) {
            return Err(PatientValidationError::ContactNotDigits);
        }
        if !(CONTACT_MIN..=CONTACT_MAX).contains(&contact.len()) {
            return Err(PatientValidationError::ContactLength {
                min: CONTACT_MIN,
                max: CONTACT_MAX,
            });
        }
        Ok(Self(contact))
    }
}

impl AsRef<str> for ContactNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ContactNumber> for String {
    fn from(value: ContactNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContactNumber {
    type Error = PatientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Patient profile owned by exactly one user account.
///
/// ## Invariants
/// - `user_id` references a user with the patient role; the storage layer
///   enforces one profile per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientId,
    user_id: UserId,
    name: String,
    age: Option<PatientAge>,
    gender: Option<Gender>,
    contact: ContactNumber,
    address: String,
}

impl Patient {
    /// Build a [`Patient`] from validated components.
    #[must_use]
    pub fn new(
        id: PatientId,
        user_id: UserId,
        name: impl Into<String>,
        age: Option<PatientAge>,
        gender: Option<Gender>,
        contact: ContactNumber,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
            age,
            gender,
            contact,
            address: address.into(),
        }
    }

    /// Profile row identifier.
    #[must_use]
    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Owning user account.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Patient display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Age, when recorded.
    #[must_use]
    pub fn age(&self) -> Option<PatientAge> {
        self.age
    }

    /// Gender, when recorded.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Contact number.
    #[must_use]
    pub fn contact(&self) -> &ContactNumber {
        &self.contact
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }
}

/// Validated fields for creating a patient profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatientProfile {
    /// Patient display name.
    pub name: String,
    /// Age, when supplied.
    pub age: Option<PatientAge>,
    /// Gender, when supplied.
    pub gender: Option<Gender>,
    /// Contact number.
    pub contact: ContactNumber,
    /// Postal address.
    pub address: String,
}

/// Partial update of a patient profile; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement age.
    pub age: Option<PatientAge>,
    /// Replacement gender.
    pub gender: Option<Gender>,
    /// Replacement contact number.
    pub contact: Option<ContactNumber>,
    /// Replacement postal address.
    pub address: Option<String>,
}

impl PatientUpdate {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.contact.is_none()
            && self.address.is_none()
    }
}
