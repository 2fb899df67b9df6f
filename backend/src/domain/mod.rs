//! Domain primitives, ports, and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, the ports that bound the hexagon, and the services
//! that implement the driving ports. Keep types immutable and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.

pub mod appointment;
pub mod auth;
mod auth_service;
pub mod dashboard;
mod dashboard_service;
pub mod department;
mod directory_service;
pub mod doctor;
pub mod email;
pub mod error;
pub mod patient;
pub mod ports;
mod profile_service;
pub mod role;
mod service_support;
pub mod trace_id;
pub mod user;

pub use self::appointment::AppointmentStatus;
pub use self::auth::{
    CredentialsValidationError, LoginCredentials, RegistrationRequest, RegistrationValidationError,
};
pub use self::auth_service::{AuthService, BootstrapAdmin};
pub use self::dashboard::{
    AdminDashboard, AppointmentTotals, DoctorAppointmentStats, DoctorDashboard,
    PatientAppointmentCounts, PatientDashboard,
};
pub use self::dashboard_service::DashboardService;
pub use self::department::{Department, DepartmentId, DepartmentUpdate, NewDepartment};
pub use self::directory_service::DirectoryService;
pub use self::doctor::{Doctor, DoctorId, DoctorUpdate, NewDoctorProfile};
pub use self::email::{EMAIL_MAX, EmailAddress, EmailValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::patient::{
    AGE_MAX, AGE_MIN, CONTACT_MAX, CONTACT_MIN, ContactNumber, Gender, NewPatientProfile, Patient,
    PatientAge, PatientId, PatientUpdate, PatientValidationError,
};
pub use self::profile_service::ProfileService;
pub use self::role::{Role, RoleParseError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{StoredUser, User, UserId, UserValidationError};
