//! Internal helpers shared by the profile, directory, and dashboard services.

use crate::domain::Error;
use crate::domain::ports::{
    AppointmentStatsError, DepartmentPersistenceError, DoctorPersistenceError, PasswordHashError,
    PatientPersistenceError,
};

pub(crate) fn map_patient_error(error: PatientPersistenceError) -> Error {
    match error {
        PatientPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("patient repository unavailable: {message}"))
        }
        PatientPersistenceError::Query { message } => {
            Error::internal(format!("patient repository error: {message}"))
        }
        PatientPersistenceError::DuplicateProfile => {
            Error::conflict("patient profile already exists")
        }
        PatientPersistenceError::DuplicateEmail => {
            Error::conflict("email address already registered")
        }
    }
}

pub(crate) fn map_doctor_error(error: DoctorPersistenceError) -> Error {
    match error {
        DoctorPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("doctor repository unavailable: {message}"))
        }
        DoctorPersistenceError::Query { message } => {
            Error::internal(format!("doctor repository error: {message}"))
        }
        DoctorPersistenceError::DuplicateProfile => Error::conflict("doctor profile already exists"),
        DoctorPersistenceError::DuplicateEmail => {
            Error::conflict("email address already registered")
        }
    }
}

pub(crate) fn map_department_error(error: DepartmentPersistenceError) -> Error {
    match error {
        DepartmentPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("department repository unavailable: {message}"))
        }
        DepartmentPersistenceError::Query { message } => {
            Error::internal(format!("department repository error: {message}"))
        }
    }
}

pub(crate) fn map_stats_error(error: AppointmentStatsError) -> Error {
    match error {
        AppointmentStatsError::Connection { message } => {
            Error::service_unavailable(format!("appointment store unavailable: {message}"))
        }
        AppointmentStatsError::Query { message } => {
            Error::internal(format!("appointment query error: {message}"))
        }
    }
}

pub(crate) fn map_hasher_error(error: PasswordHashError) -> Error {
    Error::internal(format!("password hasher failure: {error}"))
}
