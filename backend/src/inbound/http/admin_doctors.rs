//! Admin doctor directory handlers.
//!
//! ```text
//! POST /api/v1/admin/doctor {"email":"meera@hospital.example","password":"pw","name":"Dr Meera Pillai","specialization":"Cardiology","contact":"ext 4410"}
//! GET /api/v1/admin/doctor/search?q=cardio
//! GET /api/v1/admin/doctor/{id}
//! PUT /api/v1/admin/doctor/{id}
//! DELETE /api/v1/admin/doctor/{id}
//! ```
//!
//! The search route must be registered before the `{id}` routes so the
//! literal `search` segment is not captured as an identifier.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{DoctorRecord, NewDoctorAccount};
use crate::domain::{DoctorId, DoctorUpdate, Error, NewDoctorProfile, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::doctors::{DoctorDto, DoctorProfileWithEmail, UpdateDoctorProfileRequest};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_email, parse_password, parse_uuid, require_text,
};

/// Request body for `POST /api/v1/admin/doctor`: account credentials plus
/// the profile fields. All fields are required.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub contact: Option<String>,
}

/// Response body for a successful doctor provisioning.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorResponse {
    #[schema(example = "b3b26f90-64b1-44a4-a294-197c24d55ffa")]
    pub doctor_id: String,
}

/// Response body for a doctor deletion.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDoctorResponse {
    pub message: String,
}

/// Response body for a doctor search.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDoctorsResponse {
    pub results: Vec<DoctorProfileWithEmail>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn parse_new_account(payload: CreateDoctorRequest) -> ApiResult<NewDoctorAccount> {
    let email = parse_email(payload.email, FieldName::new("email"))?;
    let password = parse_password(payload.password)?;
    let name = require_text(payload.name, FieldName::new("name"))?;
    let specialization = require_text(payload.specialization, FieldName::new("specialization"))?;
    let contact = require_text(payload.contact, FieldName::new("contact"))?;
    Ok(NewDoctorAccount {
        email,
        password,
        profile: NewDoctorProfile {
            name,
            specialization,
            contact,
        },
    })
}

fn parse_doctor_id(raw: String) -> ApiResult<DoctorId> {
    parse_uuid(raw, FieldName::new("id")).map(DoctorId::from_uuid)
}

fn record_dto(record: &DoctorRecord) -> DoctorProfileWithEmail {
    DoctorProfileWithEmail {
        profile: DoctorDto::from(&record.doctor),
        email: record.email.as_ref().to_owned(),
    }
}

/// Provision a doctor account together with its profile.
#[utoipa::path(
    post,
    path = "/api/v1/admin/doctor",
    request_body = CreateDoctorRequest,
    responses(
        (status = 201, description = "Doctor created", body = CreateDoctorResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminCreateDoctor"
)]
#[post("/admin/doctor")]
pub async fn create_doctor(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateDoctorRequest>,
) -> ApiResult<HttpResponse> {
    require_role(&state, &session, Role::Admin).await?;
    let account = parse_new_account(payload.into_inner())?;
    let id = state.directory.create_doctor(account).await?;
    Ok(HttpResponse::Created().json(CreateDoctorResponse {
        doctor_id: id.to_string(),
    }))
}

/// Search doctors by name, specialization, or account email.
#[utoipa::path(
    get,
    path = "/api/v1/admin/doctor/search",
    params(("q" = Option<String>, Query, description = "Case-insensitive search term")),
    responses(
        (status = 200, description = "Matching doctors", body = SearchDoctorsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminSearchDoctors"
)]
#[get("/admin/doctor/search")]
pub async fn search_doctors(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<SearchDoctorsResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let records = state.directory_query.search_doctors(&query.q).await?;
    Ok(web::Json(SearchDoctorsResponse {
        results: records.iter().map(record_dto).collect(),
    }))
}

/// Fetch one doctor with the owning account's email.
#[utoipa::path(
    get,
    path = "/api/v1/admin/doctor/{id}",
    params(("id" = String, Path, description = "Doctor identifier")),
    responses(
        (status = 200, description = "Doctor", body = DoctorProfileWithEmail),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown doctor", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminGetDoctor"
)]
#[get("/admin/doctor/{id}")]
pub async fn get_doctor(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DoctorProfileWithEmail>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_doctor_id(path.into_inner())?;
    let record = state.directory_query.doctor(id).await?;
    Ok(web::Json(record_dto(&record)))
}

/// Apply a partial update to a doctor profile.
#[utoipa::path(
    put,
    path = "/api/v1/admin/doctor/{id}",
    params(("id" = String, Path, description = "Doctor identifier")),
    request_body = UpdateDoctorProfileRequest,
    responses(
        (status = 200, description = "Updated doctor", body = DoctorDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown doctor", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateDoctor"
)]
#[put("/admin/doctor/{id}")]
pub async fn update_doctor(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateDoctorProfileRequest>,
) -> ApiResult<web::Json<DoctorDto>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_doctor_id(path.into_inner())?;
    let payload = payload.into_inner();
    let update = DoctorUpdate {
        name: payload.name,
        specialization: payload.specialization,
        contact: payload.contact,
    };
    let doctor = state.directory.update_doctor(id, update).await?;
    Ok(web::Json(DoctorDto::from(&doctor)))
}

/// Remove a doctor profile together with its account.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/doctor/{id}",
    params(("id" = String, Path, description = "Doctor identifier")),
    responses(
        (status = 200, description = "Doctor deleted", body = DeleteDoctorResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown doctor", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteDoctor"
)]
#[delete("/admin/doctor/{id}")]
pub async fn delete_doctor(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteDoctorResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_doctor_id(path.into_inner())?;
    state.directory.delete_doctor(id).await?;
    Ok(web::Json(DeleteDoctorResponse {
        message: "doctor deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "admin_doctors_tests.rs"]
mod tests;
