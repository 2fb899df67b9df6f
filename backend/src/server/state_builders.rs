//! Builders assembling domain services over the persistence adapters.

use std::sync::Arc;

use actix_web::web;

use hms_backend::domain::{AuthService, DashboardService, DirectoryService, ProfileService};
use hms_backend::inbound::http::state::HttpState;
use hms_backend::outbound::Argon2PasswordHasher;
use hms_backend::outbound::persistence::{
    DieselAppointmentStatsRepository, DieselDepartmentRepository, DieselDoctorRepository,
    DieselPatientRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Build the shared HTTP state with Diesel-backed services.
///
/// One instance of each service backs every driving port it implements, so
/// login, registration, and identity lookups all share the account service
/// and its repository handle.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let pool = config.db_pool.clone();
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let patients = Arc::new(DieselPatientRepository::new(pool.clone()));
    let doctors = Arc::new(DieselDoctorRepository::new(pool.clone()));
    let departments = Arc::new(DieselDepartmentRepository::new(pool.clone()));
    let appointments = Arc::new(DieselAppointmentStatsRepository::new(pool));
    let hasher = Arc::new(Argon2PasswordHasher::new());

    let auth = Arc::new(AuthService::new(
        users,
        hasher.clone(),
        config.bootstrap_admin.clone(),
    ));
    let profiles = Arc::new(ProfileService::new(patients.clone(), doctors.clone()));
    let directory = Arc::new(DirectoryService::new(
        patients.clone(),
        doctors.clone(),
        departments,
        hasher,
    ));
    let dashboards = Arc::new(DashboardService::new(patients, doctors, appointments));

    web::Data::new(HttpState {
        login: auth.clone(),
        registration: auth.clone(),
        identity: auth,
        patient_profiles: profiles.clone(),
        doctor_profiles: profiles,
        directory: directory.clone(),
        directory_query: directory,
        dashboards,
    })
}
