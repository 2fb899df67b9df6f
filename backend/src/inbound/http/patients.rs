//! Patient self-service API handlers.
//!
//! ```text
//! POST /api/v1/patient/create {"name":"Asha Rao","age":34,"gender":"female","contact":"0401234567","address":"12 Ward Lane"}
//! GET /api/v1/patient/dashboard
//! PUT /api/v1/patient/update {"contact":"0407654321"}
//! ```
//!
//! Every endpoint requires a session holding the patient role.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    ContactNumber, Error, Gender, NewPatientProfile, Patient, PatientAge, PatientDashboard,
    PatientUpdate, Role,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_text};

/// Request body for `POST /api/v1/patient/create`.
///
/// `name`, `contact`, and `address` are required; `age` and `gender` are
/// optional but validated when present.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientProfileRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

/// Request body for `PUT /api/v1/patient/update`; absent fields stay unchanged.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientProfileRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

/// Patient profile fields returned by the self-service endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    #[schema(example = "7d6155e1-6b72-4778-8b25-8f2a6a2f4a3e")]
    pub id: String,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub contact: String,
    pub address: String,
}

impl From<&Patient> for PatientDto {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            name: patient.name().to_owned(),
            age: patient.age().map(|age| age.value()),
            gender: patient.gender().map(|gender| gender.as_str().to_owned()),
            contact: patient.contact().as_ref().to_owned(),
            address: patient.address().to_owned(),
        }
    }
}

/// Response body carrying a profile write confirmation.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfileResponse {
    pub message: String,
    pub patient: PatientDto,
}

/// Profile section of the patient dashboard, including the login email.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfileWithEmail {
    #[serde(flatten)]
    pub profile: PatientDto,
    pub email: String,
}

/// Appointment counts scoped to the calling patient.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientStats {
    pub upcoming_appointments: i64,
    pub past_appointments: i64,
}

/// Response body for `GET /api/v1/patient/dashboard`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientDashboardResponse {
    pub role: Role,
    pub profile: PatientProfileWithEmail,
    pub stats: PatientStats,
}

impl From<PatientDashboard> for PatientDashboardResponse {
    fn from(dashboard: PatientDashboard) -> Self {
        Self {
            role: Role::Patient,
            profile: PatientProfileWithEmail {
                profile: PatientDto::from(&dashboard.patient),
                email: dashboard.email.as_ref().to_owned(),
            },
            stats: PatientStats {
                upcoming_appointments: dashboard.upcoming_appointments,
                past_appointments: dashboard.past_appointments,
            },
        }
    }
}

pub(crate) fn parse_age(value: i32) -> ApiResult<PatientAge> {
    PatientAge::new(value).map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "age", "code": "invalid_age" }))
    })
}

pub(crate) fn parse_gender(value: &str) -> ApiResult<Gender> {
    value.parse().map_err(|err: crate::domain::PatientValidationError| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "gender", "code": "invalid_gender" }))
    })
}

pub(crate) fn parse_contact(value: &str) -> ApiResult<ContactNumber> {
    ContactNumber::new(value).map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "contact", "code": "invalid_contact" }))
    })
}

pub(crate) fn parse_new_profile(
    payload: CreatePatientProfileRequest,
) -> ApiResult<NewPatientProfile> {
    let name = require_text(payload.name, FieldName::new("name"))?;
    let contact = require_text(payload.contact, FieldName::new("contact"))?;
    let address = require_text(payload.address, FieldName::new("address"))?;
    let age = payload.age.map(parse_age).transpose()?;
    let gender = payload.gender.as_deref().map(parse_gender).transpose()?;
    let contact = parse_contact(&contact)?;
    Ok(NewPatientProfile {
        name,
        age,
        gender,
        contact,
        address,
    })
}

pub(crate) fn parse_patient_update(
    payload: UpdatePatientProfileRequest,
) -> ApiResult<PatientUpdate> {
    let age = payload.age.map(parse_age).transpose()?;
    let gender = payload.gender.as_deref().map(parse_gender).transpose()?;
    let contact = payload.contact.as_deref().map(parse_contact).transpose()?;
    Ok(PatientUpdate {
        name: payload.name,
        age,
        gender,
        contact,
        address: payload.address,
    })
}

/// Create the profile attached to the calling patient account.
#[utoipa::path(
    post,
    path = "/api/v1/patient/create",
    request_body = CreatePatientProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = PatientProfileResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Profile already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["patients"],
    operation_id = "createPatientProfile"
)]
#[post("/patient/create")]
pub async fn create_patient_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreatePatientProfileRequest>,
) -> ApiResult<HttpResponse> {
    let user = require_role(&state, &session, Role::Patient).await?;
    let profile = parse_new_profile(payload.into_inner())?;
    let patient = state
        .patient_profiles
        .create_profile(user.id(), profile)
        .await?;
    Ok(HttpResponse::Created().json(PatientProfileResponse {
        message: "patient profile created successfully".to_owned(),
        patient: PatientDto::from(&patient),
    }))
}

/// Profile and appointment counts for the calling patient.
#[utoipa::path(
    get,
    path = "/api/v1/patient/dashboard",
    responses(
        (status = 200, description = "Dashboard", body = PatientDashboardResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No profile on record", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["patients"],
    operation_id = "patientDashboard"
)]
#[get("/patient/dashboard")]
pub async fn patient_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PatientDashboardResponse>> {
    let user = require_role(&state, &session, Role::Patient).await?;
    let dashboard = state.dashboards.patient_dashboard(user.id()).await?;
    Ok(web::Json(dashboard.into()))
}

/// Apply a partial update to the calling patient's profile.
#[utoipa::path(
    put,
    path = "/api/v1/patient/update",
    request_body = UpdatePatientProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = PatientProfileResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No profile on record", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["patients"],
    operation_id = "updatePatientProfile"
)]
#[put("/patient/update")]
pub async fn update_patient_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpdatePatientProfileRequest>,
) -> ApiResult<web::Json<PatientProfileResponse>> {
    let user = require_role(&state, &session, Role::Patient).await?;
    let update = parse_patient_update(payload.into_inner())?;
    let patient = state
        .patient_profiles
        .update_profile(user.id(), update)
        .await?;
    Ok(web::Json(PatientProfileResponse {
        message: "profile updated successfully".to_owned(),
        patient: PatientDto::from(&patient),
    }))
}

#[cfg(test)]
#[path = "patients_tests.rs"]
mod tests;
