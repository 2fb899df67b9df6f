//! Doctor profile model.
//!
//! Doctor contact details are free-form: the original intake flow captures
//! whatever the directory administrator supplies, so no format validation
//! applies beyond presence.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;

/// Identifier of a doctor profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(Uuid);

impl DoctorId {
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

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Doctor profile owned by exactly one user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    id: DoctorId,
    user_id: UserId,
    name: String,
    specialization: String,
    contact: String,
}

impl Doctor {
    /// Build a [`Doctor`] from validated components.
    #[must_use]
    pub fn new(
        id: DoctorId,
        user_id: UserId,
        name: impl Into<String>,
        specialization: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
            specialization: specialization.into(),
            contact: contact.into(),
        }
    }

    /// Profile row identifier.
    #[must_use]
    pub fn id(&self) -> DoctorId {
        self.id
    }

    /// Owning user account.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Doctor display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Medical specialization.
    #[must_use]
    pub fn specialization(&self) -> &str {
        self.specialization.as_str()
    }

    /// Contact details.
    #[must_use]
    pub fn contact(&self) -> &str {
        self.contact.as_str()
    }
}

/// Fields for creating a doctor profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctorProfile {
    /// Doctor display name.
    pub name: String,
    /// Medical specialization.
    pub specialization: String,
    /// Contact details.
    pub contact: String,
}

/// Partial update of a doctor profile; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement specialization.
    pub specialization: Option<String>,
    /// Replacement contact details.
    pub contact: Option<String>,
}

impl DoctorUpdate {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.specialization.is_none() && self.contact.is_none()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn update_reports_emptiness() {
        assert!(DoctorUpdate::default().is_empty());
        let update = DoctorUpdate {
            specialization: Some("Cardiology".to_owned()),
            ..DoctorUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
