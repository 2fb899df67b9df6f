//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{
    MockDashboardQuery, MockDirectoryCommand, MockDirectoryQuery, MockDoctorProfileCommand,
    MockIdentityQuery, MockLoginService, MockPatientProfileCommand, MockRegistrationService,
};
use crate::domain::{EmailAddress, Role, User, UserId};
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Mutable bundle of mock driving ports for handler tests.
///
/// Tests set expectations on the mocks they exercise, leave the rest
/// untouched, and convert the bundle into an [`HttpState`].
pub struct MockPorts {
    pub login: MockLoginService,
    pub registration: MockRegistrationService,
    pub identity: MockIdentityQuery,
    pub patient_profiles: MockPatientProfileCommand,
    pub doctor_profiles: MockDoctorProfileCommand,
    pub directory: MockDirectoryCommand,
    pub directory_query: MockDirectoryQuery,
    pub dashboards: MockDashboardQuery,
}

impl MockPorts {
    pub fn new() -> Self {
        Self {
            login: MockLoginService::new(),
            registration: MockRegistrationService::new(),
            identity: MockIdentityQuery::new(),
            patient_profiles: MockPatientProfileCommand::new(),
            doctor_profiles: MockDoctorProfileCommand::new(),
            directory: MockDirectoryCommand::new(),
            directory_query: MockDirectoryQuery::new(),
            dashboards: MockDashboardQuery::new(),
        }
    }

    /// Stub login and identity lookups so `user` is the authenticated account.
    ///
    /// Login succeeds for any credentials and the identity query resolves any
    /// session id to the same user, which is what role-gated handler tests
    /// need before exercising their own port expectations.
    pub fn authenticate_as(&mut self, user: &User) {
        let login_user = user.clone();
        self.login
            .expect_authenticate()
            .returning(move |_| Ok(login_user.clone()));
        let identity_user = user.clone();
        self.identity
            .expect_find_user()
            .returning(move |_| Ok(Some(identity_user.clone())));
    }

    pub fn into_state(self) -> HttpState {
        HttpState {
            login: Arc::new(self.login),
            registration: Arc::new(self.registration),
            identity: Arc::new(self.identity),
            patient_profiles: Arc::new(self.patient_profiles),
            doctor_profiles: Arc::new(self.doctor_profiles),
            directory: Arc::new(self.directory),
            directory_query: Arc::new(self.directory_query),
            dashboards: Arc::new(self.dashboards),
        }
    }
}

impl Default for MockPorts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture account for handler tests that only need a valid identity.
pub fn test_user(role: Role) -> User {
    let email = match role {
        Role::Admin => "admin@hospital.example",
        Role::Doctor => "doctor@hospital.example",
        Role::Patient => "patient@hospital.example",
    };
    User::new(
        UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id"),
        EmailAddress::new(email).expect("fixture email"),
        role,
    )
}
