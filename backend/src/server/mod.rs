//! Server construction and middleware wiring.

mod app_settings;
mod config;
mod state_builders;

pub use app_settings::AppSettings;
pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use hms_backend::Trace;
#[cfg(debug_assertions)]
use hms_backend::doc::ApiDoc;
use hms_backend::inbound::http::accounts::{login, logout, register};
use hms_backend::inbound::http::admin::admin_dashboard;
use hms_backend::inbound::http::admin_departments::{
    create_department, delete_department, get_department, search_departments, update_department,
};
use hms_backend::inbound::http::admin_doctors::{
    create_doctor, delete_doctor, get_doctor, search_doctors, update_doctor,
};
use hms_backend::inbound::http::admin_patients::{
    create_patient, delete_patient, get_patient, search_patients, update_patient,
};
use hms_backend::inbound::http::doctors::{doctor_dashboard, update_doctor_profile};
use hms_backend::inbound::http::health::{HealthState, live, ready};
use hms_backend::inbound::http::patients::{
    create_patient_profile, patient_dashboard, update_patient_profile,
};
use hms_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    // Literal segments must register ahead of `{id}` captures so that
    // `/admin/patient/search` is not swallowed by the id route.
    let api = web::scope("/api/v1")
        .wrap(session)
        .service(register)
        .service(login)
        .service(logout)
        .service(admin_dashboard)
        .service(create_patient)
        .service(search_patients)
        .service(get_patient)
        .service(update_patient)
        .service(delete_patient)
        .service(create_doctor)
        .service(search_doctors)
        .service(get_doctor)
        .service(update_doctor)
        .service(delete_doctor)
        .service(create_department)
        .service(search_departments)
        .service(get_department)
        .service(update_department)
        .service(delete_department)
        .service(create_patient_profile)
        .service(patient_dashboard)
        .service(update_patient_profile)
        .service(doctor_dashboard)
        .service(update_doctor_profile);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing session, binding, and persistence settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
        bootstrap_admin: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
