//! Account API handlers: registration, login, and logout.
//!
//! ```text
//! POST /api/v1/register {"email":"new@patient.example","password":"pw","role":"patient"}
//! POST /api/v1/login {"email":"new@patient.example","password":"pw"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    CredentialsValidationError, Error, LoginCredentials, RegistrationRequest,
    RegistrationValidationError, Role,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_field};

/// Registration request body for `POST /api/v1/register`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    /// Identifier of the created account.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub email: String,
    pub role: Role,
}

/// Response body for a logout.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub message: String,
}

fn parse_registration(payload: RegisterRequest) -> ApiResult<RegistrationRequest> {
    let email = require_field(payload.email, FieldName::new("email"))?;
    let password = require_field(payload.password, FieldName::new("password"))?;
    let role = require_field(payload.role, FieldName::new("role"))?;
    RegistrationRequest::try_from_parts(&email, &password, &role)
        .map_err(map_registration_validation_error)
}

fn parse_login(payload: LoginRequest) -> ApiResult<LoginCredentials> {
    let email = require_field(payload.email, FieldName::new("email"))?;
    let password = require_field(payload.password, FieldName::new("password"))?;
    LoginCredentials::try_from_parts(&email, &password).map_err(map_credentials_validation_error)
}

fn map_registration_validation_error(err: RegistrationValidationError) -> Error {
    match err {
        RegistrationValidationError::InvalidEmail(err) => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "email", "code": "invalid_email" })),
        RegistrationValidationError::EmptyPassword => {
            Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
        RegistrationValidationError::InvalidRole => {
            Error::invalid_request("role must be one of doctor or patient")
                .with_details(json!({ "field": "role", "code": "invalid_role" }))
        }
        RegistrationValidationError::AdminRoleReserved => {
            Error::invalid_request("admin accounts cannot be created through registration")
                .with_details(json!({ "field": "role", "code": "admin_role_reserved" }))
        }
    }
}

fn map_credentials_validation_error(err: CredentialsValidationError) -> Error {
    match err {
        CredentialsValidationError::InvalidEmail(err) => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "email", "code": "invalid_email" })),
        CredentialsValidationError::EmptyPassword => {
            Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
    }
}

/// Create a doctor or patient account.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request = parse_registration(payload.into_inner())?;
    let user = state.registration.register(&request).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "user registered successfully".to_owned(),
        id: user.id().to_string(),
    }))
}

/// Authenticate a user and establish a session.
///
/// Uses the centralised `Error` type so clients get a consistent
/// error schema across all endpoints.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = parse_login(payload.into_inner())?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(LoginResponse {
        message: "login successful".to_owned(),
        email: user.email().as_ref().to_owned(),
        role: user.role(),
    }))
}

/// Invalidate the caller's session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Session cleared", body = LogoutResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<web::Json<LogoutResponse>> {
    session.require_user_id()?;
    session.purge();
    Ok(web::Json(LogoutResponse {
        message: "logged out successfully".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

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
            .service(
                web::scope("/api/v1")
                    .service(register)
                    .service(login)
                    .service(logout),
            )
    }

    #[actix_web::test]
    async fn register_creates_account_and_returns_id() {
        let mut ports = MockPorts::new();
        let user = test_user(Role::Patient);
        let expected_id = user.id().to_string();
        ports
            .registration
            .expect_register()
            .withf(|request| {
                request.email().as_ref() == "new@patient.example"
                    && request.role() == Role::Patient
            })
            .returning(move |_| Ok(user.clone()));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(serde_json::json!({
                "email": "new@patient.example",
                "password": "pw",
                "role": "patient"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("user registered successfully")
        );
        assert_eq!(
            body.get("id").and_then(Value::as_str),
            Some(expected_id.as_str())
        );
    }

    #[actix_web::test]
    async fn register_rejects_missing_role() {
        let app = actix_test::init_service(test_app(MockPorts::new().into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(serde_json::json!({
                "email": "new@patient.example",
                "password": "pw"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        let details = body.get("details").expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some("role"));
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("missing_field")
        );
    }

    #[actix_web::test]
    async fn register_rejects_admin_role() {
        let app = actix_test::init_service(test_app(MockPorts::new().into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(serde_json::json!({
                "email": "new@admin.example",
                "password": "pw",
                "role": "admin"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        let details = body.get("details").expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("admin_role_reserved")
        );
    }

    #[actix_web::test]
    async fn register_surfaces_duplicate_email_as_conflict() {
        let mut ports = MockPorts::new();
        ports
            .registration
            .expect_register()
            .returning(|_| Err(Error::conflict("email address already registered")));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(serde_json::json!({
                "email": "taken@patient.example",
                "password": "pw",
                "role": "patient"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("conflict"));
    }

    #[actix_web::test]
    async fn login_establishes_session_and_returns_identity() {
        let mut ports = MockPorts::new();
        let user = test_user(Role::Doctor);
        ports
            .login
            .expect_authenticate()
            .withf(|credentials| credentials.email().as_ref() == "doctor@hospital.example")
            .returning(move |_| Ok(user.clone()));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(serde_json::json!({
                "email": "doctor@hospital.example",
                "password": "pw"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session");
        assert!(cookie.is_some(), "session cookie issued");
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("login successful")
        );
        assert_eq!(
            body.get("email").and_then(Value::as_str),
            Some("doctor@hospital.example")
        );
        assert_eq!(body.get("role").and_then(Value::as_str), Some("doctor"));
    }

    #[actix_web::test]
    async fn login_rejects_wrong_credentials_with_unauthorised_status() {
        let mut ports = MockPorts::new();
        ports
            .login
            .expect_authenticate()
            .returning(|_| Err(Error::unauthorized("invalid credentials")));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(serde_json::json!({
                "email": "doctor@hospital.example",
                "password": "wrong"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("invalid credentials")
        );
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("unauthorized")
        );
    }

    #[actix_web::test]
    async fn login_rejects_malformed_email() {
        let app = actix_test::init_service(test_app(MockPorts::new().into_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(serde_json::json!({
                "email": "not-an-email",
                "password": "pw"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        let details = body.get("details").expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some("email"));
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("invalid_email")
        );
    }

    #[actix_web::test]
    async fn logout_clears_the_session() {
        let mut ports = MockPorts::new();
        let user = test_user(Role::Patient);
        ports
            .login
            .expect_authenticate()
            .returning(move |_| Ok(user.clone()));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let login_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(serde_json::json!({
                    "email": "patient@hospital.example",
                    "password": "pw"
                }))
                .to_request(),
        )
        .await;
        let cookie = login_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned();

        let logout_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/logout")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(logout_res.status(), StatusCode::OK);
        let expired = logout_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("removal cookie set");
        assert_eq!(expired.value(), "");
        let body: Value = actix_test::read_body_json(logout_res).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("logged out successfully")
        );
    }

    #[actix_web::test]
    async fn logout_without_session_is_unauthorised() {
        let app = actix_test::init_service(test_app(MockPorts::new().into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/logout")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
