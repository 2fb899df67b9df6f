//! Port abstraction for department persistence.

use async_trait::async_trait;

use crate::domain::{Department, DepartmentId, DepartmentUpdate, NewDepartment};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by department repository adapters.
    pub enum DepartmentPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "department repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "department repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Insert a department and return its generated identifier.
    async fn create(&self, department: &NewDepartment)
    -> Result<DepartmentId, DepartmentPersistenceError>;

    /// Fetch a department by its identifier.
    async fn find(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentPersistenceError>;

    /// Apply a partial update and return the new state.
    ///
    /// Resolves to `None` when no department matches the identifier.
    async fn update(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> Result<Option<Department>, DepartmentPersistenceError>;

    /// Delete a department.
    ///
    /// Returns `false` when no department matched the identifier.
    async fn delete(&self, id: DepartmentId) -> Result<bool, DepartmentPersistenceError>;

    /// Case-insensitive name search over departments.
    async fn search(&self, term: &str) -> Result<Vec<Department>, DepartmentPersistenceError>;
}
