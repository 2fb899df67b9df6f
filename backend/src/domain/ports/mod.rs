//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod appointment_stats;
mod dashboard_query;
mod department_repository;
mod directory_command;
mod directory_query;
mod doctor_profile;
mod doctor_repository;
mod identity_query;
mod login_service;
mod password_hasher;
mod patient_profile;
mod patient_repository;
mod registration;
mod user_repository;

#[cfg(test)]
pub use appointment_stats::MockAppointmentStatsRepository;
pub use appointment_stats::{AppointmentStatsError, AppointmentStatsRepository};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::DashboardQuery;
#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
pub use department_repository::{DepartmentPersistenceError, DepartmentRepository};
#[cfg(test)]
pub use directory_command::MockDirectoryCommand;
pub use directory_command::{DirectoryCommand, NewDoctorAccount, NewPatientAccount};
#[cfg(test)]
pub use directory_query::MockDirectoryQuery;
pub use directory_query::DirectoryQuery;
#[cfg(test)]
pub use doctor_profile::MockDoctorProfileCommand;
pub use doctor_profile::DoctorProfileCommand;
#[cfg(test)]
pub use doctor_repository::MockDoctorRepository;
pub use doctor_repository::{DoctorPersistenceError, DoctorRecord, DoctorRepository};
#[cfg(test)]
pub use identity_query::MockIdentityQuery;
pub use identity_query::IdentityQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use patient_profile::MockPatientProfileCommand;
pub use patient_profile::PatientProfileCommand;
#[cfg(test)]
pub use patient_repository::MockPatientRepository;
pub use patient_repository::{PatientPersistenceError, PatientRecord, PatientRepository};
#[cfg(test)]
pub use registration::MockRegistrationService;
pub use registration::RegistrationService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
