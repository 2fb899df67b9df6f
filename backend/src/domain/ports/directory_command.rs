//! Driving port for administrative directory mutations.
//!
//! Administrators provision patients and doctors account-and-profile in one
//! step, so the create payloads carry credentials alongside profile fields.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{
    Department, DepartmentId, DepartmentUpdate, Doctor, DoctorId, DoctorUpdate, EmailAddress,
    Error, NewDepartment, NewDoctorProfile, NewPatientProfile, Patient, PatientId, PatientUpdate,
};

/// Payload for provisioning a patient account with its profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatientAccount {
    pub email: EmailAddress,
    pub password: Zeroizing<String>,
    pub profile: NewPatientProfile,
}

/// Payload for provisioning a doctor account with its profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctorAccount {
    pub email: EmailAddress,
    pub password: Zeroizing<String>,
    pub profile: NewDoctorProfile,
}

/// Domain use-case port for administrative writes to the directory.
///
/// Every mutation that touches more than one table happens inside a single
/// transaction below the port; a conflict or failure leaves no partial rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryCommand: Send + Sync {
    /// Provision a patient account and profile.
    ///
    /// # Errors
    ///
    /// Returns a conflict [`Error`] when the email address is already
    /// registered.
    async fn create_patient(&self, account: NewPatientAccount) -> Result<PatientId, Error>;

    /// Apply a partial update to a patient profile.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request [`Error`] for an empty update and a
    /// not-found [`Error`] for an unknown identifier.
    async fn update_patient(&self, id: PatientId, update: PatientUpdate)
    -> Result<Patient, Error>;

    /// Remove a patient profile together with its account.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] for an unknown identifier.
    async fn delete_patient(&self, id: PatientId) -> Result<(), Error>;

    /// Provision a doctor account and profile.
    ///
    /// # Errors
    ///
    /// Returns a conflict [`Error`] when the email address is already
    /// registered.
    async fn create_doctor(&self, account: NewDoctorAccount) -> Result<DoctorId, Error>;

    /// Apply a partial update to a doctor profile.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request [`Error`] for an empty update and a
    /// not-found [`Error`] for an unknown identifier.
    async fn update_doctor(&self, id: DoctorId, update: DoctorUpdate) -> Result<Doctor, Error>;

    /// Remove a doctor profile together with its account.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] for an unknown identifier.
    async fn delete_doctor(&self, id: DoctorId) -> Result<(), Error>;

    /// Create a department.
    async fn create_department(&self, department: NewDepartment) -> Result<DepartmentId, Error>;

    /// Apply a partial update to a department.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request [`Error`] for an empty update and a
    /// not-found [`Error`] for an unknown identifier.
    async fn update_department(
        &self,
        id: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<Department, Error>;

    /// Remove a department.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] for an unknown identifier.
    async fn delete_department(&self, id: DepartmentId) -> Result<(), Error>;
}
