//! Admin dashboard handler.
//!
//! ```text
//! GET /api/v1/admin/dashboard
//! ```
//!
//! Entity management routes live in the per-entity admin modules.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{AdminDashboard, Error, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// System-wide totals shown on the admin dashboard.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_doctors: i64,
    pub total_patients: i64,
    pub total_appointments: i64,
    pub upcoming_appointments: i64,
    pub completed_appointments: i64,
    pub active_patients: i64,
}

/// Response body for `GET /api/v1/admin/dashboard`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardResponse {
    pub role: Role,
    pub stats: AdminStats,
}

impl From<AdminDashboard> for AdminDashboardResponse {
    fn from(dashboard: AdminDashboard) -> Self {
        Self {
            role: Role::Admin,
            stats: AdminStats {
                total_doctors: dashboard.total_doctors,
                total_patients: dashboard.total_patients,
                total_appointments: dashboard.total_appointments,
                upcoming_appointments: dashboard.upcoming_appointments,
                completed_appointments: dashboard.completed_appointments,
                active_patients: dashboard.active_patients,
            },
        }
    }
}

/// Headcounts and appointment totals across the whole system.
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard", body = AdminDashboardResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDashboard"
)]
#[get("/admin/dashboard")]
pub async fn admin_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AdminDashboardResponse>> {
    require_role(&state, &session, Role::Admin).await?;
    let dashboard = state.dashboards.admin_dashboard().await?;
    Ok(web::Json(dashboard.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

    use crate::inbound::http::accounts::login;
    use crate::inbound::http::test_utils::{MockPorts, test_session_middleware, test_user};

    fn test_app(
        state: crate::inbound::http::state::HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(web::scope("/api/v1").service(login).service(admin_dashboard))
    }

    async fn login_as(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        email: &str,
    ) -> actix_web::cookie::Cookie<'static> {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(serde_json::json!({ "email": email, "password": "pw" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[actix_web::test]
    async fn dashboard_reports_system_totals() {
        let mut ports = MockPorts::new();
        ports.authenticate_as(&test_user(Role::Admin));
        ports.dashboards.expect_admin_dashboard().returning(|| {
            Ok(AdminDashboard {
                total_doctors: 4,
                total_patients: 12,
                total_appointments: 30,
                upcoming_appointments: 9,
                completed_appointments: 21,
                active_patients: 7,
            })
        });
        let app = actix_test::init_service(test_app(ports.into_state())).await;
        let cookie = login_as(&app, "admin@hospital.example").await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/admin/dashboard")
            .cookie(cookie)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("role").and_then(Value::as_str), Some("admin"));
        let stats = body.get("stats").expect("stats present");
        assert_eq!(stats.get("totalDoctors").and_then(Value::as_i64), Some(4));
        assert_eq!(stats.get("totalPatients").and_then(Value::as_i64), Some(12));
        assert_eq!(
            stats.get("totalAppointments").and_then(Value::as_i64),
            Some(30)
        );
        assert_eq!(
            stats.get("upcomingAppointments").and_then(Value::as_i64),
            Some(9)
        );
        assert_eq!(
            stats.get("completedAppointments").and_then(Value::as_i64),
            Some(21)
        );
        assert_eq!(
            stats.get("activePatients").and_then(Value::as_i64),
            Some(7)
        );
    }

    #[actix_web::test]
    async fn dashboard_is_forbidden_for_non_admins() {
        let mut ports = MockPorts::new();
        ports.authenticate_as(&test_user(Role::Doctor));
        let app = actix_test::init_service(test_app(ports.into_state())).await;
        let cookie = login_as(&app, "doctor@hospital.example").await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/admin/dashboard")
            .cookie(cookie)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("unauthorized access")
        );
    }

    #[actix_web::test]
    async fn dashboard_requires_a_session() {
        let app = actix_test::init_service(test_app(MockPorts::new().into_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/admin/dashboard")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
