//! Admin patient directory handlers.
//!
//! ```text
//! POST /api/v1/admin/patient {"email":"asha@patient.example","password":"pw","name":"Asha Rao","contact":"0401234567","address":"12 Ward Lane"}
//! GET /api/v1/admin/patient/search?q=rao
//! GET /api/v1/admin/patient/{id}
//! PUT /api/v1/admin/patient/{id}
//! DELETE /api/v1/admin/patient/{id}
//! ```
//!
//! The search route must be registered before the `{id}` routes so the
//! literal `search` segment is not captured as an identifier.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{NewPatientAccount, PatientRecord};
use crate::domain::{Error, PatientId, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::patients::{
    CreatePatientProfileRequest, PatientDto, PatientProfileWithEmail, UpdatePatientProfileRequest,
    parse_new_profile, parse_patient_update,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_email, parse_password, parse_uuid};

/// Request body for `POST /api/v1/admin/patient`: account credentials plus
/// the profile fields.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

/// Response body for a successful patient provisioning.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientResponse {
    #[schema(example = "7d6155e1-6b72-4778-8b25-8f2a6a2f4a3e")]
    pub patient_id: String,
}

/// Response body for a patient deletion.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePatientResponse {
    pub message: String,
}

/// Response body for a patient search.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPatientsResponse {
    pub results: Vec<PatientProfileWithEmail>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn parse_new_account(payload: CreatePatientRequest) -> ApiResult<NewPatientAccount> {
    let email = parse_email(payload.email, FieldName::new("email"))?;
    let password = parse_password(payload.password)?;
    let profile = parse_new_profile(CreatePatientProfileRequest {
        name: payload.name,
        age: payload.age,
        gender: payload.gender,
        contact: payload.contact,
        address: payload.address,
    })?;
    Ok(NewPatientAccount {
        email,
        password,
        profile,
    })
}

fn parse_patient_id(raw: String) -> ApiResult<PatientId> {
    parse_uuid(raw, FieldName::new("id")).map(PatientId::from_uuid)
}

fn record_dto(record: &PatientRecord) -> PatientProfileWithEmail {
    PatientProfileWithEmail {
        profile: PatientDto::from(&record.patient),
        email: record.email.as_ref().to_owned(),
    }
}

/// Provision a patient account together with its profile.
#[utoipa::path(
    post,
    path = "/api/v1/admin/patient",
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient created", body = CreatePatientResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminCreatePatient"
)]
#[post("/admin/patient")]
pub async fn create_patient(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreatePatientRequest>,
) -> ApiResult<HttpResponse> {
    require_role(&state, &session, Role::Admin).await?;
    let account = parse_new_account(payload.into_inner())?;
    let id = state.directory.create_patient(account).await?;
    Ok(HttpResponse::Created().json(CreatePatientResponse {
        patient_id: id.to_string(),
    }))
}

/// Search patients by name, contact, or account email.
#[utoipa::path(
    get,
    path = "/api/v1/admin/patient/search",
    params(("q" = Option<String>, Query, description = "Case-insensitive search term")),
    responses(
        (status = 200, description = "Matching patients", body = SearchPatientsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminSearchPatients"
)]
#[get("/admin/patient/search")]
pub async fn search_patients(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<SearchPatientsResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let records = state.directory_query.search_patients(&query.q).await?;
    Ok(web::Json(SearchPatientsResponse {
        results: records.iter().map(record_dto).collect(),
    }))
}

/// Fetch one patient with the owning account's email.
#[utoipa::path(
    get,
    path = "/api/v1/admin/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Patient", body = PatientProfileWithEmail),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown patient", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminGetPatient"
)]
#[get("/admin/patient/{id}")]
pub async fn get_patient(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<PatientProfileWithEmail>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_patient_id(path.into_inner())?;
    let record = state.directory_query.patient(id).await?;
    Ok(web::Json(record_dto(&record)))
}

/// Apply a partial update to a patient profile.
#[utoipa::path(
    put,
    path = "/api/v1/admin/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier")),
    request_body = UpdatePatientProfileRequest,
    responses(
        (status = 200, description = "Updated patient", body = PatientDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown patient", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminUpdatePatient"
)]
#[put("/admin/patient/{id}")]
pub async fn update_patient(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdatePatientProfileRequest>,
) -> ApiResult<web::Json<PatientDto>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_patient_id(path.into_inner())?;
    let update = parse_patient_update(payload.into_inner())?;
    let patient = state.directory.update_patient(id, update).await?;
    Ok(web::Json(PatientDto::from(&patient)))
}

/// Remove a patient profile together with its account.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Patient deleted", body = DeletePatientResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown patient", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDeletePatient"
)]
#[delete("/admin/patient/{id}")]
pub async fn delete_patient(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletePatientResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_patient_id(path.into_inner())?;
    state.directory.delete_patient(id).await?;
    Ok(web::Json(DeletePatientResponse {
        message: "patient deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "admin_patients_tests.rs"]
mod tests;
