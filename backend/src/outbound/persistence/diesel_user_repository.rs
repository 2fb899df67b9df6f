//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! This adapter owns identifier generation for new accounts and converts
//! rows back through the validated domain constructors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, Role, StoredUser, User, UserId};

use super::diesel_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, map_unique_aware_diesel_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message| UserPersistenceError::connection(message))
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Map Diesel errors for the insert path, where a unique violation means
/// the email address is taken.
fn map_insert_error(error: diesel::result::Error) -> UserPersistenceError {
    map_unique_aware_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
        |_constraint| UserPersistenceError::duplicate_email(),
    )
}

fn parse_identity(id: Uuid, email: String, role: String) -> Result<User, UserPersistenceError> {
    let email =
        EmailAddress::new(email).map_err(|err| UserPersistenceError::query(err.to_string()))?;
    let role = role
        .parse::<Role>()
        .map_err(|err| UserPersistenceError::query(err.to_string()))?;
    Ok(User::new(UserId::from_uuid(id), email, role))
}

/// Convert a database row into a domain user.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        email,
        password_hash: _,
        role,
        created_at: _,
    } = row;
    parse_identity(id, email, role)
}

/// Convert a database row into a domain user with its password hash.
fn row_to_stored_user(row: UserRow) -> Result<StoredUser, UserPersistenceError> {
    let UserRow {
        id,
        email,
        password_hash,
        role,
        created_at: _,
    } = row;
    let user = parse_identity(id, email, role)?;
    Ok(StoredUser::new(user, password_hash))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(
        &self,
        email: &EmailAddress,
        password_hash: &str,
        role: Role,
    ) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = Uuid::new_v4();
        let new_row = NewUserRow {
            id,
            email: email.as_ref(),
            password_hash,
            role: role.as_str(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_insert_error)?;

        Ok(User::new(UserId::from_uuid(id), email.clone(), role))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredUser>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_stored_user).transpose()
    }
}
