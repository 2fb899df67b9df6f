//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod admin;
pub mod admin_departments;
pub mod admin_doctors;
pub mod admin_patients;
pub mod auth;
pub mod doctors;
pub mod error;
pub mod health;
pub mod patients;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
