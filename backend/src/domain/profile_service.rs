//! Self-service profile domain services.
//!
//! Implements the driving ports a logged-in patient or doctor uses to manage
//! the profile attached to their own account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    DoctorProfileCommand, DoctorRepository, PatientProfileCommand, PatientRepository,
};
use crate::domain::service_support::{map_doctor_error, map_patient_error};
use crate::domain::{
    Doctor, DoctorUpdate, Error, NewPatientProfile, Patient, PatientUpdate, UserId,
};

/// Profile service implementing the self-service driving ports.
#[derive(Clone)]
pub struct ProfileService<P, D> {
    patients: Arc<P>,
    doctors: Arc<D>,
}

impl<P, D> ProfileService<P, D> {
    /// Create a new service over the profile repositories.
    pub fn new(patients: Arc<P>, doctors: Arc<D>) -> Self {
        Self { patients, doctors }
    }
}

#[async_trait]
impl<P, D> PatientProfileCommand for ProfileService<P, D>
where
    P: PatientRepository,
    D: DoctorRepository,
{
    async fn create_profile(
        &self,
        user_id: &UserId,
        profile: NewPatientProfile,
    ) -> Result<Patient, Error> {
        self.patients
            .create_profile(user_id, &profile)
            .await
            .map_err(map_patient_error)
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        update: PatientUpdate,
    ) -> Result<Patient, Error> {
        if update.is_empty() {
            return Err(Error::invalid_request("no data provided"));
        }

        self.patients
            .update_by_user(user_id, &update)
            .await
            .map_err(map_patient_error)?
            .ok_or_else(|| Error::not_found("patient profile not found"))
    }
}

#[async_trait]
impl<P, D> DoctorProfileCommand for ProfileService<P, D>
where
    P: PatientRepository,
    D: DoctorRepository,
{
    async fn update_profile(
        &self,
        user_id: &UserId,
        update: DoctorUpdate,
    ) -> Result<Doctor, Error> {
        if update.is_empty() {
            return Err(Error::invalid_request("no data provided"));
        }

        self.doctors
            .update_by_user(user_id, &update)
            .await
            .map_err(map_doctor_error)?
            .ok_or_else(|| Error::not_found("doctor profile not found"))
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
