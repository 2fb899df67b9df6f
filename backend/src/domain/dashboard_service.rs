//! Dashboard aggregation domain service.
//!
//! Joins profile repositories with appointment aggregates to build the
//! per-role landing views.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AppointmentStatsRepository, DashboardQuery, DoctorRepository, PatientRepository,
};
use crate::domain::service_support::{map_doctor_error, map_patient_error, map_stats_error};
use crate::domain::{AdminDashboard, DoctorDashboard, Error, PatientDashboard, UserId};

/// Dashboard service implementing the dashboard driving port.
#[derive(Clone)]
pub struct DashboardService<P, D, A> {
    patients: Arc<P>,
    doctors: Arc<D>,
    appointments: Arc<A>,
}

impl<P, D, A> DashboardService<P, D, A> {
    /// Create a new service over the profile and appointment repositories.
    pub fn new(patients: Arc<P>, doctors: Arc<D>, appointments: Arc<A>) -> Self {
        Self {
            patients,
            doctors,
            appointments,
        }
    }
}

#[async_trait]
impl<P, D, A> DashboardQuery for DashboardService<P, D, A>
where
    P: PatientRepository,
    D: DoctorRepository,
    A: AppointmentStatsRepository,
{
    async fn admin_dashboard(&self) -> Result<AdminDashboard, Error> {
        let totals = self.appointments.totals().await.map_err(map_stats_error)?;
        let total_patients = self.patients.count().await.map_err(map_patient_error)?;
        let total_doctors = self.doctors.count().await.map_err(map_doctor_error)?;

        Ok(AdminDashboard {
            total_doctors,
            total_patients,
            total_appointments: totals.total,
            upcoming_appointments: totals.upcoming,
            completed_appointments: totals.completed,
            active_patients: totals.active_patients,
        })
    }

    async fn patient_dashboard(&self, user_id: &UserId) -> Result<PatientDashboard, Error> {
        let record = self
            .patients
            .find_by_user(user_id)
            .await
            .map_err(map_patient_error)?
            .ok_or_else(|| Error::not_found("patient profile not found"))?;

        let counts = self
            .appointments
            .counts_for_patient(record.patient.id())
            .await
            .map_err(map_stats_error)?;

        Ok(PatientDashboard {
            patient: record.patient,
            email: record.email,
            upcoming_appointments: counts.upcoming,
            past_appointments: counts.completed,
        })
    }

    async fn doctor_dashboard(&self, user_id: &UserId) -> Result<DoctorDashboard, Error> {
        let record = self
            .doctors
            .find_by_user(user_id)
            .await
            .map_err(map_doctor_error)?
            .ok_or_else(|| Error::not_found("doctor profile not found"))?;

        let stats = self
            .appointments
            .stats_for_doctor(record.doctor.id())
            .await
            .map_err(map_stats_error)?;

        Ok(DoctorDashboard {
            doctor: record.doctor,
            email: record.email,
            total_appointments: stats.total,
            upcoming_appointments: stats.upcoming,
            completed_appointments: stats.completed,
            unique_patients: stats.unique_patients,
        })
    }
}

#[cfg(test)]
#[path = "dashboard_service_tests.rs"]
mod tests;
