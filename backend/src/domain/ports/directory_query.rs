//! Driving port for administrative directory reads.

use async_trait::async_trait;

use crate::domain::{Department, DepartmentId, DoctorId, Error, PatientId};

use super::doctor_repository::DoctorRecord;
use super::patient_repository::PatientRecord;

/// Domain use-case port for administrative reads over the directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Fetch one patient with the owning account's email.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] for an unknown identifier.
    async fn patient(&self, id: PatientId) -> Result<PatientRecord, Error>;

    /// Fetch one doctor with the owning account's email.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] for an unknown identifier.
    async fn doctor(&self, id: DoctorId) -> Result<DoctorRecord, Error>;

    /// Fetch one department.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] for an unknown identifier.
    async fn department(&self, id: DepartmentId) -> Result<Department, Error>;

    /// Case-insensitive substring search over patient name, contact, and
    /// account email. An empty term lists every patient.
    async fn search_patients(&self, term: &str) -> Result<Vec<PatientRecord>, Error>;

    /// Case-insensitive substring search over doctor name, specialisation,
    /// and account email. An empty term lists every doctor.
    async fn search_doctors(&self, term: &str) -> Result<Vec<DoctorRecord>, Error>;

    /// Case-insensitive substring search over department names. An empty
    /// term lists every department.
    async fn search_departments(&self, term: &str) -> Result<Vec<Department>, Error>;
}
