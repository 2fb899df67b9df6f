//! PostgreSQL-backed `DepartmentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{DepartmentPersistenceError, DepartmentRepository};
use crate::domain::{Department, DepartmentId, DepartmentUpdate, NewDepartment};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_helpers::like_pattern;
use super::models::{DepartmentChangeset, DepartmentRow, NewDepartmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::departments;

/// Diesel-backed implementation of the department repository port.
#[derive(Clone)]
pub struct DieselDepartmentRepository {
    pool: DbPool,
}

impl DieselDepartmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> DepartmentPersistenceError {
    map_basic_pool_error(error, |message| {
        DepartmentPersistenceError::connection(message)
    })
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> DepartmentPersistenceError {
    map_basic_diesel_error(
        error,
        DepartmentPersistenceError::query,
        DepartmentPersistenceError::connection,
    )
}

fn to_changeset(update: &DepartmentUpdate) -> DepartmentChangeset<'_> {
    DepartmentChangeset {
        name: update.name.as_deref(),
        description: update.description.as_deref(),
    }
}

/// Convert a database row into a domain department.
fn row_to_department(row: DepartmentRow) -> Department {
    let DepartmentRow {
        id,
        name,
        description,
        created_at: _,
    } = row;

    Department::new(DepartmentId::from_uuid(id), name, description)
}

#[async_trait]
impl DepartmentRepository for DieselDepartmentRepository {
    async fn create(
        &self,
        department: &NewDepartment,
    ) -> Result<DepartmentId, DepartmentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = Uuid::new_v4();
        let new_row = NewDepartmentRow {
            id,
            name: department.name.as_str(),
            description: department.description.as_deref(),
        };

        diesel::insert_into(departments::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(DepartmentId::from_uuid(id))
    }

    async fn find(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = departments::table
            .filter(departments::id.eq(id.as_uuid()))
            .select(DepartmentRow::as_select())
            .first::<DepartmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_department))
    }

    async fn update(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> Result<Option<Department>, DepartmentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = to_changeset(update);

        let row = diesel::update(departments::table.filter(departments::id.eq(id.as_uuid())))
            .set(&changeset)
            .returning(DepartmentRow::as_returning())
            .get_result::<DepartmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_department))
    }

    async fn delete(&self, id: DepartmentId) -> Result<bool, DepartmentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(departments::table.filter(departments::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Department>, DepartmentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(term);

        let rows: Vec<DepartmentRow> = departments::table
            .filter(departments::name.ilike(pattern))
            .order(departments::name.asc())
            .select(DepartmentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_department).collect())
    }
}
