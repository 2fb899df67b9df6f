//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (accounts, admin
//!   directory, patient and doctor self-service, health)
//! - **Schemas**: Request and response bodies plus the shared error payload
//! - **Security**: Session cookie authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Role};
use crate::inbound::http::{
    accounts, admin, admin_departments, admin_doctors, admin_patients, doctors, patients,
};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "HMS backend API",
        description = "HTTP interface for role-gated hospital management and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::admin::admin_dashboard,
        crate::inbound::http::admin_patients::create_patient,
        crate::inbound::http::admin_patients::search_patients,
        crate::inbound::http::admin_patients::get_patient,
        crate::inbound::http::admin_patients::update_patient,
        crate::inbound::http::admin_patients::delete_patient,
        crate::inbound::http::admin_doctors::create_doctor,
        crate::inbound::http::admin_doctors::search_doctors,
        crate::inbound::http::admin_doctors::get_doctor,
        crate::inbound::http::admin_doctors::update_doctor,
        crate::inbound::http::admin_doctors::delete_doctor,
        crate::inbound::http::admin_departments::create_department,
        crate::inbound::http::admin_departments::search_departments,
        crate::inbound::http::admin_departments::get_department,
        crate::inbound::http::admin_departments::update_department,
        crate::inbound::http::admin_departments::delete_department,
        crate::inbound::http::patients::create_patient_profile,
        crate::inbound::http::patients::patient_dashboard,
        crate::inbound::http::patients::update_patient_profile,
        crate::inbound::http::doctors::doctor_dashboard,
        crate::inbound::http::doctors::update_doctor_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        accounts::RegisterRequest,
        accounts::RegisterResponse,
        accounts::LoginRequest,
        accounts::LoginResponse,
        accounts::LogoutResponse,
        admin::AdminStats,
        admin::AdminDashboardResponse,
        admin_patients::CreatePatientRequest,
        admin_patients::CreatePatientResponse,
        admin_patients::DeletePatientResponse,
        admin_patients::SearchPatientsResponse,
        admin_doctors::CreateDoctorRequest,
        admin_doctors::CreateDoctorResponse,
        admin_doctors::DeleteDoctorResponse,
        admin_doctors::SearchDoctorsResponse,
        admin_departments::CreateDepartmentRequest,
        admin_departments::UpdateDepartmentRequest,
        admin_departments::DepartmentDto,
        admin_departments::CreateDepartmentResponse,
        admin_departments::DeleteDepartmentResponse,
        admin_departments::SearchDepartmentsResponse,
        patients::CreatePatientProfileRequest,
        patients::UpdatePatientProfileRequest,
        patients::PatientDto,
        patients::PatientProfileResponse,
        patients::PatientProfileWithEmail,
        patients::PatientStats,
        patients::PatientDashboardResponse,
        doctors::UpdateDoctorProfileRequest,
        doctors::DoctorDto,
        doctors::DoctorProfileResponse,
        doctors::DoctorProfileWithEmail,
        doctors::DoctorStats,
        doctors::DoctorDashboardResponse,
    )),
    tags(
        (name = "accounts", description = "Registration, login, and logout"),
        (name = "admin", description = "Administrative dashboard and directory management"),
        (name = "patients", description = "Patient self-service profile and dashboard"),
        (name = "doctors", description = "Doctor dashboard and profile updates"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
