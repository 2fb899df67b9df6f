//! Admin department directory handlers.
//!
//! ```text
//! POST /api/v1/admin/department {"name":"Cardiology","description":"Heart and vascular care"}
//! GET /api/v1/admin/department/search?q=cardio
//! GET /api/v1/admin/department/{id}
//! PUT /api/v1/admin/department/{id}
//! DELETE /api/v1/admin/department/{id}
//! ```
//!
//! Departments carry no account, so the payloads are plain profile fields.
//! The search route must be registered before the `{id}` routes so the
//! literal `search` segment is not captured as an identifier.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Department, DepartmentId, DepartmentUpdate, Error, NewDepartment, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, require_text};

/// Request body for `POST /api/v1/admin/department`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for `PUT /api/v1/admin/department/{id}`; absent fields stay
/// unchanged.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Department fields returned by the admin endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    #[schema(example = "52a9b7ce-2708-44bb-8e3a-9a9e3c1bb574")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Department> for DepartmentDto {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id().to_string(),
            name: department.name().to_owned(),
            description: department.description().map(str::to_owned),
        }
    }
}

/// Response body for a successful department creation.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentResponse {
    #[schema(example = "52a9b7ce-2708-44bb-8e3a-9a9e3c1bb574")]
    pub department_id: String,
}

/// Response body for a department deletion.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDepartmentResponse {
    pub message: String,
}

/// Response body for a department search.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDepartmentsResponse {
    pub results: Vec<DepartmentDto>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn parse_new_department(payload: CreateDepartmentRequest) -> ApiResult<NewDepartment> {
    let name = require_text(payload.name, FieldName::new("name"))?;
    Ok(NewDepartment {
        name,
        description: payload.description,
    })
}

fn parse_department_id(raw: String) -> ApiResult<DepartmentId> {
    parse_uuid(raw, FieldName::new("id")).map(DepartmentId::from_uuid)
}

/// Create a department.
#[utoipa::path(
    post,
    path = "/api/v1/admin/department",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = CreateDepartmentResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Name already taken", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminCreateDepartment"
)]
#[post("/admin/department")]
pub async fn create_department(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateDepartmentRequest>,
) -> ApiResult<HttpResponse> {
    require_role(&state, &session, Role::Admin).await?;
    let department = parse_new_department(payload.into_inner())?;
    let id = state.directory.create_department(department).await?;
    Ok(HttpResponse::Created().json(CreateDepartmentResponse {
        department_id: id.to_string(),
    }))
}

/// Search departments by name.
#[utoipa::path(
    get,
    path = "/api/v1/admin/department/search",
    params(("q" = Option<String>, Query, description = "Case-insensitive search term")),
    responses(
        (status = 200, description = "Matching departments", body = SearchDepartmentsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminSearchDepartments"
)]
#[get("/admin/department/search")]
pub async fn search_departments(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<SearchDepartmentsResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let departments = state.directory_query.search_departments(&query.q).await?;
    Ok(web::Json(SearchDepartmentsResponse {
        results: departments.iter().map(DepartmentDto::from).collect(),
    }))
}

/// Fetch one department.
#[utoipa::path(
    get,
    path = "/api/v1/admin/department/{id}",
    params(("id" = String, Path, description = "Department identifier")),
    responses(
        (status = 200, description = "Department", body = DepartmentDto),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown department", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminGetDepartment"
)]
#[get("/admin/department/{id}")]
pub async fn get_department(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DepartmentDto>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_department_id(path.into_inner())?;
    let department = state.directory_query.department(id).await?;
    Ok(web::Json(DepartmentDto::from(&department)))
}

/// Apply a partial update to a department.
#[utoipa::path(
    put,
    path = "/api/v1/admin/department/{id}",
    params(("id" = String, Path, description = "Department identifier")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Updated department", body = DepartmentDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown department", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateDepartment"
)]
#[put("/admin/department/{id}")]
pub async fn update_department(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateDepartmentRequest>,
) -> ApiResult<web::Json<DepartmentDto>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_department_id(path.into_inner())?;
    let payload = payload.into_inner();
    let update = DepartmentUpdate {
        name: payload.name,
        description: payload.description,
    };
    let department = state.directory.update_department(id, update).await?;
    Ok(web::Json(DepartmentDto::from(&department)))
}

/// Remove a department.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/department/{id}",
    params(("id" = String, Path, description = "Department identifier")),
    responses(
        (status = 200, description = "Department deleted", body = DeleteDepartmentResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown department", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteDepartment"
)]
#[delete("/admin/department/{id}")]
pub async fn delete_department(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteDepartmentResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let id = parse_department_id(path.into_inner())?;
    state.directory.delete_department(id).await?;
    Ok(web::Json(DeleteDepartmentResponse {
        message: "department deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "admin_departments_tests.rs"]
mod tests;
