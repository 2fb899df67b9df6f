//! PostgreSQL-backed `DoctorRepository` implementation using Diesel ORM.
//!
//! Mirrors the patient adapter: joined reads for the account email, a
//! single transaction for account-plus-profile creation, and cascade
//! deletes through the users table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{DoctorPersistenceError, DoctorRecord, DoctorRepository};
use crate::domain::{Doctor, DoctorId, DoctorUpdate, EmailAddress, NewDoctorProfile, Role, UserId};

use super::diesel_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, map_unique_aware_diesel_error,
};
use super::diesel_helpers::like_pattern;
use super::models::{DoctorChangeset, DoctorRow, NewDoctorRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{doctors, users};

/// Diesel-backed implementation of the doctor repository port.
#[derive(Clone)]
pub struct DieselDoctorRepository {
    pool: DbPool,
}

impl DieselDoctorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> DoctorPersistenceError {
    map_basic_pool_error(error, |message| DoctorPersistenceError::connection(message))
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> DoctorPersistenceError {
    map_basic_diesel_error(
        error,
        DoctorPersistenceError::query,
        DoctorPersistenceError::connection,
    )
}

/// Map Diesel errors for the account-plus-profile transaction.
fn map_account_insert_error(error: diesel::result::Error) -> DoctorPersistenceError {
    map_unique_aware_diesel_error(
        error,
        DoctorPersistenceError::query,
        DoctorPersistenceError::connection,
        |constraint| match constraint {
            Some("doctors_user_id_key") => DoctorPersistenceError::duplicate_profile(),
            _ => DoctorPersistenceError::duplicate_email(),
        },
    )
}

fn to_changeset(update: &DoctorUpdate) -> DoctorChangeset<'_> {
    DoctorChangeset {
        name: update.name.as_deref(),
        specialization: update.specialization.as_deref(),
        contact: update.contact.as_deref(),
    }
}

/// Convert a database row into a domain doctor.
fn row_to_doctor(row: DoctorRow) -> Doctor {
    let DoctorRow {
        id,
        user_id,
        name,
        specialization,
        contact,
        created_at: _,
    } = row;

    Doctor::new(
        DoctorId::from_uuid(id),
        UserId::from_uuid(user_id),
        name,
        specialization,
        contact,
    )
}

/// Convert a joined row into a doctor record with the account email.
fn row_to_record(
    (row, email): (DoctorRow, String),
) -> Result<DoctorRecord, DoctorPersistenceError> {
    let email =
        EmailAddress::new(email).map_err(|err| DoctorPersistenceError::query(err.to_string()))?;
    Ok(DoctorRecord {
        doctor: row_to_doctor(row),
        email,
    })
}

#[async_trait]
impl DoctorRepository for DieselDoctorRepository {
    async fn create_with_account(
        &self,
        email: &EmailAddress,
        password_hash: &str,
        profile: &NewDoctorProfile,
    ) -> Result<DoctorId, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user_id = Uuid::new_v4();
        let doctor_id = Uuid::new_v4();

        let new_user = NewUserRow {
            id: user_id,
            email: email.as_ref(),
            password_hash,
            role: Role::Doctor.as_str(),
        };
        let new_doctor = NewDoctorRow {
            id: doctor_id,
            user_id,
            name: profile.name.as_str(),
            specialization: profile.specialization.as_str(),
            contact: profile.contact.as_str(),
        };

        // Account and profile land together or not at all.
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(users::table)
                    .values(&new_user)
                    .execute(conn)
                    .await?;

                diesel::insert_into(doctors::table)
                    .values(&new_doctor)
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_account_insert_error)?;

        Ok(DoctorId::from_uuid(doctor_id))
    }

    async fn find(&self, id: DoctorId) -> Result<Option<DoctorRecord>, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = doctors::table
            .inner_join(users::table)
            .filter(doctors::id.eq(id.as_uuid()))
            .select((DoctorRow::as_select(), users::email))
            .first::<(DoctorRow, String)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<DoctorRecord>, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = doctors::table
            .inner_join(users::table)
            .filter(doctors::user_id.eq(user_id.as_uuid()))
            .select((DoctorRow::as_select(), users::email))
            .first::<(DoctorRow, String)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn update(
        &self,
        id: DoctorId,
        update: &DoctorUpdate,
    ) -> Result<Option<Doctor>, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = to_changeset(update);

        let row = diesel::update(doctors::table.filter(doctors::id.eq(id.as_uuid())))
            .set(&changeset)
            .returning(DoctorRow::as_returning())
            .get_result::<DoctorRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_doctor))
    }

    async fn update_by_user(
        &self,
        user_id: &UserId,
        update: &DoctorUpdate,
    ) -> Result<Option<Doctor>, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = to_changeset(update);

        let row = diesel::update(doctors::table.filter(doctors::user_id.eq(user_id.as_uuid())))
            .set(&changeset)
            .returning(DoctorRow::as_returning())
            .get_result::<DoctorRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_doctor))
    }

    async fn delete(&self, id: DoctorId) -> Result<bool, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Deleting the account cascades to the profile row.
        let owner = doctors::table
            .filter(doctors::id.eq(id.as_uuid()))
            .select(doctors::user_id);

        let deleted = diesel::delete(users::table.filter(users::id.eq_any(owner)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<DoctorRecord>, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(term);

        let rows: Vec<(DoctorRow, String)> = doctors::table
            .inner_join(users::table)
            .filter(
                doctors::name
                    .ilike(pattern.clone())
                    .or(doctors::specialization.ilike(pattern.clone()))
                    .or(users::email.ilike(pattern)),
            )
            .order(doctors::name.asc())
            .select((DoctorRow::as_select(), users::email))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn count(&self) -> Result<i64, DoctorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        doctors::table
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.
    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    fn sample_row() -> DoctorRow {
        DoctorRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Dr Imran Shah".to_owned(),
            specialization: "Cardiology".to_owned(),
            contact: "0407654321".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let persistence_err = map_pool_error(PoolError::build("bad database url"));

        assert!(matches!(
            persistence_err,
            DoctorPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn account_insert_unique_violation_defaults_to_duplicate_email() {
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );

        assert_eq!(
            map_account_insert_error(diesel_err),
            DoctorPersistenceError::DuplicateEmail
        );
    }

    #[rstest]
    fn row_converts_to_doctor() {
        let row = sample_row();
        let id = row.id;

        let doctor = row_to_doctor(row);

        assert_eq!(doctor.id().as_uuid(), &id);
        assert_eq!(doctor.name(), "Dr Imran Shah");
        assert_eq!(doctor.specialization(), "Cardiology");
        assert_eq!(doctor.contact(), "0407654321");
    }

    #[rstest]
    fn joined_row_carries_email() {
        let record = row_to_record((sample_row(), "imran.shah@example.org".to_owned()))
            .expect("valid joined row");

        assert_eq!(record.email.as_ref(), "imran.shah@example.org");
        assert_eq!(record.doctor.specialization(), "Cardiology");
    }

    #[rstest]
    fn corrupt_email_maps_to_query_error() {
        let persistence_err = row_to_record((sample_row(), "not an email".to_owned()))
            .expect_err("invalid email must fail");

        assert!(matches!(
            persistence_err,
            DoctorPersistenceError::Query { .. }
        ));
    }

    #[rstest]
    fn changeset_skips_absent_fields() {
        let update = DoctorUpdate {
            contact: Some("0400000000".to_owned()),
            ..DoctorUpdate::default()
        };

        let changeset = to_changeset(&update);

        assert_eq!(changeset.contact, Some("0400000000"));
        assert_eq!(changeset.name, None);
        assert_eq!(changeset.specialization, None);
    }
}
