use super::*;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{ContactNumber, EmailAddress, Gender, Patient, PatientAge, UserId};
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
        .service(
            web::scope("/api/v1")
                .service(login)
                .service(create_patient)
                .service(search_patients)
                .service(get_patient)
                .service(update_patient)
                .service(delete_patient),
        )
}

async fn login_cookie<S>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(serde_json::json!({
                "email": "admin@hospital.example",
                "password": "pw"
            }))
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

fn sample_record(id: PatientId) -> PatientRecord {
    let patient = Patient::new(
        id,
        UserId::random(),
        "Asha Rao",
        Some(PatientAge::new(34).expect("fixture age")),
        Some(Gender::Female),
        ContactNumber::new("0401234567").expect("fixture contact"),
        "12 Ward Lane",
    );
    PatientRecord {
        patient,
        email: EmailAddress::new("asha@patient.example").expect("fixture email"),
    }
}

#[actix_web::test]
async fn create_provisions_account_and_returns_id() {
    let mut ports = MockPorts::new();
    let id = PatientId::from_uuid(Uuid::new_v4());
    let expected_id = id.to_string();
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory
        .expect_create_patient()
        .withf(|account| {
            account.email.as_ref() == "asha@patient.example"
                && account.password.as_str() == "pw123"
                && account.profile.name == "Asha Rao"
        })
        .returning(move |_| Ok(id));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/admin/patient")
        .cookie(cookie)
        .set_json(serde_json::json!({
            "email": "asha@patient.example",
            "password": "pw123",
            "name": "Asha Rao",
            "age": 34,
            "gender": "female",
            "contact": "0401234567",
            "address": "12 Ward Lane"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("patientId").and_then(Value::as_str),
        Some(expected_id.as_str())
    );
}

#[actix_web::test]
async fn create_requires_email() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Admin));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/admin/patient")
        .cookie(cookie)
        .set_json(serde_json::json!({
            "password": "pw123",
            "name": "Asha Rao",
            "contact": "0401234567",
            "address": "12 Ward Lane"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let details = body.get("details").expect("details present");
    assert_eq!(details.get("field").and_then(Value::as_str), Some("email"));
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("missing_field")
    );
}

#[actix_web::test]
async fn create_rejects_malformed_email() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Admin));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/admin/patient")
        .cookie(cookie)
        .set_json(serde_json::json!({
            "email": "not-an-email",
            "password": "pw123",
            "name": "Asha Rao",
            "contact": "0401234567",
            "address": "12 Ward Lane"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let details = body.get("details").expect("details present");
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("invalid_email")
    );
}

#[actix_web::test]
async fn create_surfaces_duplicate_email_as_conflict() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory
        .expect_create_patient()
        .returning(|_| Err(Error::conflict("email address already registered")));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/admin/patient")
        .cookie(cookie)
        .set_json(serde_json::json!({
            "email": "taken@patient.example",
            "password": "pw123",
            "name": "Asha Rao",
            "contact": "0401234567",
            "address": "12 Ward Lane"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn get_returns_patient_with_email() {
    let mut ports = MockPorts::new();
    let id = PatientId::from_uuid(Uuid::new_v4());
    let record = sample_record(id);
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory_query
        .expect_patient()
        .withf(move |requested| *requested == id)
        .returning(move |_| Ok(record.clone()));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/admin/patient/{id}"))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("id").and_then(Value::as_str),
        Some(id.to_string().as_str())
    );
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Asha Rao"));
    assert_eq!(
        body.get("email").and_then(Value::as_str),
        Some("asha@patient.example")
    );
}

#[actix_web::test]
async fn get_with_unknown_id_is_not_found() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory_query
        .expect_patient()
        .returning(|_| Err(Error::not_found("patient not found")));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/admin/patient/{}", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_with_malformed_id_is_bad_request() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Admin));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/admin/patient/not-a-uuid")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let details = body.get("details").expect("details present");
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("invalid_uuid")
    );
}

#[actix_web::test]
async fn update_returns_the_amended_patient() {
    let mut ports = MockPorts::new();
    let id = PatientId::from_uuid(Uuid::new_v4());
    let updated = Patient::new(
        id,
        UserId::random(),
        "Asha Rao",
        Some(PatientAge::new(35).expect("fixture age")),
        Some(Gender::Female),
        ContactNumber::new("0401234567").expect("fixture contact"),
        "12 Ward Lane",
    );
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory
        .expect_update_patient()
        .withf(move |requested, update| {
            *requested == id && update.age.map(|age| age.value()) == Some(35)
        })
        .returning(move |_, _| Ok(updated.clone()));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/admin/patient/{id}"))
        .cookie(cookie)
        .set_json(serde_json::json!({ "age": 35 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("age").and_then(Value::as_i64), Some(35));
}

#[actix_web::test]
async fn delete_confirms_removal() {
    let mut ports = MockPorts::new();
    let id = PatientId::from_uuid(Uuid::new_v4());
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory
        .expect_delete_patient()
        .withf(move |requested| *requested == id)
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/patient/{id}"))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("patient deleted successfully")
    );
}

#[actix_web::test]
async fn search_passes_the_term_through() {
    let mut ports = MockPorts::new();
    let record = sample_record(PatientId::from_uuid(Uuid::new_v4()));
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory_query
        .expect_search_patients()
        .withf(|term| term == "rao")
        .returning(move |_| Ok(vec![record.clone()]));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/admin/patient/search?q=rao")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let results = body
        .get("results")
        .and_then(Value::as_array)
        .expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].get("email").and_then(Value::as_str),
        Some("asha@patient.example")
    );
}

#[actix_web::test]
async fn search_without_term_lists_everyone() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Admin));
    ports
        .directory_query
        .expect_search_patients()
        .withf(|term| term.is_empty())
        .returning(|_| Ok(Vec::new()));
    let app = actix_test::init_service(test_app(ports.into_state())).await;
    let cookie = login_cookie(&app).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/admin/patient/search")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("results").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
}

#[actix_web::test]
async fn routes_are_forbidden_for_non_admins() {
    let mut ports = MockPorts::new();
    ports.authenticate_as(&test_user(Role::Patient));
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

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/admin/patient/search?q=rao")
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
