//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DashboardQuery, DirectoryCommand, DirectoryQuery, DoctorProfileCommand, IdentityQuery,
    LoginService, PatientProfileCommand, RegistrationService,
};

/// Dependency bundle for HTTP handlers.
///
/// Every field is a driving port; production wiring points them at the
/// domain services while handler tests substitute mocks.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub identity: Arc<dyn IdentityQuery>,
    pub patient_profiles: Arc<dyn PatientProfileCommand>,
    pub doctor_profiles: Arc<dyn DoctorProfileCommand>,
    pub directory: Arc<dyn DirectoryCommand>,
    pub directory_query: Arc<dyn DirectoryQuery>,
    pub dashboards: Arc<dyn DashboardQuery>,
}
