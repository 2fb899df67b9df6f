//! PostgreSQL-backed `AppointmentStatsRepository` implementation.
//!
//! The scheduling system owns the appointments table; this adapter only
//! runs aggregate counts over it for the dashboards.

use async_trait::async_trait;
use diesel::dsl::count_distinct;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AppointmentStatsError, AppointmentStatsRepository};
use crate::domain::{
    AppointmentStatus, AppointmentTotals, DoctorAppointmentStats, DoctorId,
    PatientAppointmentCounts, PatientId,
};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::appointments;

/// Diesel-backed implementation of the appointment statistics port.
#[derive(Clone)]
pub struct DieselAppointmentStatsRepository {
    pool: DbPool,
}

impl DieselAppointmentStatsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain statistics errors.
fn map_pool_error(error: PoolError) -> AppointmentStatsError {
    map_basic_pool_error(error, |message| AppointmentStatsError::connection(message))
}

/// Map Diesel errors to domain statistics errors.
fn map_diesel_error(error: diesel::result::Error) -> AppointmentStatsError {
    map_basic_diesel_error(
        error,
        AppointmentStatsError::query,
        AppointmentStatsError::connection,
    )
}

#[async_trait]
impl AppointmentStatsRepository for DieselAppointmentStatsRepository {
    async fn totals(&self) -> Result<AppointmentTotals, AppointmentStatsError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total = appointments::table
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let upcoming = appointments::table
            .filter(appointments::status.eq(AppointmentStatus::Upcoming.as_str()))
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let completed = appointments::table
            .filter(appointments::status.eq(AppointmentStatus::Completed.as_str()))
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        // A patient is active while they still have an upcoming appointment.
        let active_patients = appointments::table
            .filter(appointments::status.eq(AppointmentStatus::Upcoming.as_str()))
            .select(count_distinct(appointments::patient_id))
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(AppointmentTotals {
            total,
            upcoming,
            completed,
            active_patients,
        })
    }

    async fn counts_for_patient(
        &self,
        patient: PatientId,
    ) -> Result<PatientAppointmentCounts, AppointmentStatsError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let upcoming = appointments::table
            .filter(
                appointments::patient_id
                    .eq(patient.as_uuid())
                    .and(appointments::status.eq(AppointmentStatus::Upcoming.as_str())),
            )
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let completed = appointments::table
            .filter(
                appointments::patient_id
                    .eq(patient.as_uuid())
                    .and(appointments::status.eq(AppointmentStatus::Completed.as_str())),
            )
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(PatientAppointmentCounts {
            upcoming,
            completed,
        })
    }

    async fn stats_for_doctor(
        &self,
        doctor: DoctorId,
    ) -> Result<DoctorAppointmentStats, AppointmentStatsError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total = appointments::table
            .filter(appointments::doctor_id.eq(doctor.as_uuid()))
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let upcoming = appointments::table
            .filter(
                appointments::doctor_id
                    .eq(doctor.as_uuid())
                    .and(appointments::status.eq(AppointmentStatus::Upcoming.as_str())),
            )
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let completed = appointments::table
            .filter(
                appointments::doctor_id
                    .eq(doctor.as_uuid())
                    .and(appointments::status.eq(AppointmentStatus::Completed.as_str())),
            )
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let unique_patients = appointments::table
            .filter(appointments::doctor_id.eq(doctor.as_uuid()))
            .select(count_distinct(appointments::patient_id))
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(DoctorAppointmentStats {
            total,
            upcoming,
            completed,
            unique_patients,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for statistics error mapping.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let stats_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(stats_err, AppointmentStatsError::Connection { .. }));
        assert!(stats_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let stats_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(stats_err, AppointmentStatsError::Query { .. }));
        assert!(stats_err.to_string().contains("record not found"));
    }
}
