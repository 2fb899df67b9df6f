//! Driving port for role-specific dashboard aggregation.

use async_trait::async_trait;

use crate::domain::{AdminDashboard, DoctorDashboard, Error, PatientDashboard, UserId};

/// Domain use-case port assembling the per-role landing views.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// System-wide headcounts and appointment totals for administrators.
    async fn admin_dashboard(&self) -> Result<AdminDashboard, Error>;

    /// Profile and appointment counts for the calling patient.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the account has no patient profile
    /// yet.
    async fn patient_dashboard(&self, user_id: &UserId) -> Result<PatientDashboard, Error>;

    /// Profile and workload statistics for the calling doctor.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when no doctor profile is provisioned
    /// for the account.
    async fn doctor_dashboard(&self, user_id: &UserId) -> Result<DoctorDashboard, Error>;
}
