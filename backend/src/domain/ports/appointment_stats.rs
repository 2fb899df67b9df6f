//! Port abstraction for appointment aggregate queries.
//!
//! Appointments are written by the scheduling system, not by this service;
//! the dashboards only ever read counts over them.

use async_trait::async_trait;

use crate::domain::{
    AppointmentTotals, DoctorAppointmentStats, DoctorId, PatientAppointmentCounts, PatientId,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by appointment statistics adapters.
    pub enum AppointmentStatsError {
        /// Repository connection could not be established.
        Connection { message: String } => "appointment store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "appointment query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentStatsRepository: Send + Sync {
    /// Aggregate counts across every appointment in the system.
    async fn totals(&self) -> Result<AppointmentTotals, AppointmentStatsError>;

    /// Upcoming and completed counts for one patient.
    async fn counts_for_patient(
        &self,
        patient: PatientId,
    ) -> Result<PatientAppointmentCounts, AppointmentStatsError>;

    /// Workload statistics for one doctor.
    async fn stats_for_doctor(
        &self,
        doctor: DoctorId,
    ) -> Result<DoctorAppointmentStats, AppointmentStatsError>;
}
