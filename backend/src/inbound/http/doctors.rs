//! Doctor self-service API handlers.
//!
//! ```text
//! GET /api/v1/doctor/dashboard
//! PUT /api/v1/doctor/update {"specialization":"Cardiology"}
//! ```
//!
//! Doctor profiles are provisioned by administrators, so there is no
//! self-service create route; doctors can only view and amend their own
//! record.

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Doctor, DoctorDashboard, DoctorUpdate, Error, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request body for `PUT /api/v1/doctor/update`; absent fields stay unchanged.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorProfileRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub contact: Option<String>,
}

/// Doctor profile fields returned by the self-service endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    #[schema(example = "b3b26f90-64b1-44a4-a294-197c24d55ffa")]
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub contact: String,
}

impl From<&Doctor> for DoctorDto {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id().to_string(),
            name: doctor.name().to_owned(),
            specialization: doctor.specialization().to_owned(),
            contact: doctor.contact().to_owned(),
        }
    }
}

/// Response body carrying a profile write confirmation.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileResponse {
    pub message: String,
    pub doctor: DoctorDto,
}

/// Profile section of the doctor dashboard, including the login email.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileWithEmail {
    #[serde(flatten)]
    pub profile: DoctorDto,
    pub email: String,
}

/// Workload statistics scoped to the calling doctor.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorStats {
    pub total_appointments: i64,
    pub upcoming_appointments: i64,
    pub completed_appointments: i64,
    pub unique_patients: i64,
}

/// Response body for `GET /api/v1/doctor/dashboard`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDashboardResponse {
    pub role: Role,
    pub profile: DoctorProfileWithEmail,
    pub stats: DoctorStats,
}

impl From<DoctorDashboard> for DoctorDashboardResponse {
    fn from(dashboard: DoctorDashboard) -> Self {
        Self {
            role: Role::Doctor,
            profile: DoctorProfileWithEmail {
                profile: DoctorDto::from(&dashboard.doctor),
                email: dashboard.email.as_ref().to_owned(),
            },
            stats: DoctorStats {
                total_appointments: dashboard.total_appointments,
                upcoming_appointments: dashboard.upcoming_appointments,
                completed_appointments: dashboard.completed_appointments,
                unique_patients: dashboard.unique_patients,
            },
        }
    }
}

/// Profile and workload statistics for the calling doctor.
#[utoipa::path(
    get,
    path = "/api/v1/doctor/dashboard",
    responses(
        (status = 200, description = "Dashboard", body = DoctorDashboardResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No profile on record", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["doctors"],
    operation_id = "doctorDashboard"
)]
#[get("/doctor/dashboard")]
pub async fn doctor_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DoctorDashboardResponse>> {
    let user = require_role(&state, &session, Role::Doctor).await?;
    let dashboard = state.dashboards.doctor_dashboard(user.id()).await?;
    Ok(web::Json(dashboard.into()))
}

/// Apply a partial update to the calling doctor's profile.
#[utoipa::path(
    put,
    path = "/api/v1/doctor/update",
    request_body = UpdateDoctorProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = DoctorProfileResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No profile on record", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["doctors"],
    operation_id = "updateDoctorProfile"
)]
#[put("/doctor/update")]
pub async fn update_doctor_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpdateDoctorProfileRequest>,
) -> ApiResult<web::Json<DoctorProfileResponse>> {
    let user = require_role(&state, &session, Role::Doctor).await?;
    let payload = payload.into_inner();
    let update = DoctorUpdate {
        name: payload.name,
        specialization: payload.specialization,
        contact: payload.contact,
    };
    let doctor = state
        .doctor_profiles
        .update_profile(user.id(), update)
        .await?;
    Ok(web::Json(DoctorProfileResponse {
        message: "profile updated successfully".to_owned(),
        doctor: DoctorDto::from(&doctor),
    }))
}

#[cfg(test)]
#[path = "doctors_tests.rs"]
mod tests;
