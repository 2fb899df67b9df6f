//! PostgreSQL-backed `PatientRepository` implementation using Diesel ORM.
//!
//! Reads join the owning account so callers get the contact email in one
//! round trip. Account-plus-profile creation runs in a single transaction,
//! and deletes go through the users table so the profile row follows via
//! the cascade.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{PatientPersistenceError, PatientRecord, PatientRepository};
use crate::domain::{
    ContactNumber, EmailAddress, Gender, NewPatientProfile, Patient, PatientAge, PatientId,
    PatientUpdate, Role, UserId,
};

use super::diesel_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, map_unique_aware_diesel_error,
};
use super::diesel_helpers::like_pattern;
use super::models::{NewPatientRow, NewUserRow, PatientChangeset, PatientRow};
use super::pool::{DbPool, PoolError};
use super::schema::{patients, users};

/// Diesel-backed implementation of the patient repository port.
#[derive(Clone)]
pub struct DieselPatientRepository {
    pool: DbPool,
}

impl DieselPatientRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> PatientPersistenceError {
    map_basic_pool_error(error, |message| {
        PatientPersistenceError::connection(message)
    })
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> PatientPersistenceError {
    map_basic_diesel_error(
        error,
        PatientPersistenceError::query,
        PatientPersistenceError::connection,
    )
}

/// Map Diesel errors for profile-only inserts, where a unique violation
/// means the account already has a profile.
fn map_profile_insert_error(error: diesel::result::Error) -> PatientPersistenceError {
    map_unique_aware_diesel_error(
        error,
        PatientPersistenceError::query,
        PatientPersistenceError::connection,
        |_constraint| PatientPersistenceError::duplicate_profile(),
    )
}

/// Map Diesel errors for the account-plus-profile transaction.
///
/// The write touches two unique columns, so the violated constraint decides
/// which duplicate the caller sees.
fn map_account_insert_error(error: diesel::result::Error) -> PatientPersistenceError {
    map_unique_aware_diesel_error(
        error,
        PatientPersistenceError::query,
        PatientPersistenceError::connection,
        |constraint| match constraint {
            Some("patients_user_id_key") => PatientPersistenceError::duplicate_profile(),
            _ => PatientPersistenceError::duplicate_email(),
        },
    )
}

fn new_patient_row<'a>(
    id: Uuid,
    user_id: Uuid,
    profile: &'a NewPatientProfile,
) -> NewPatientRow<'a> {
    NewPatientRow {
        id,
        user_id,
        name: profile.name.as_str(),
        age: profile.age.map(|age| age.value()),
        gender: profile.gender.map(|gender| gender.as_str()),
        contact: profile.contact.as_ref(),
        address: profile.address.as_str(),
    }
}

fn to_changeset(update: &PatientUpdate) -> PatientChangeset<'_> {
    PatientChangeset {
        name: update.name.as_deref(),
        age: update.age.map(|age| age.value()),
        gender: update.gender.map(|gender| gender.as_str()),
        contact: update.contact.as_ref().map(|contact| contact.as_ref()),
        address: update.address.as_deref(),
    }
}

/// Convert a database row into a validated domain patient.
fn row_to_patient(row: PatientRow) -> Result<Patient, PatientPersistenceError> {
    let PatientRow {
        id,
        user_id,
        name,
        age,
        gender,
        contact,
        address,
        created_at: _,
    } = row;

    let age = age
        .map(PatientAge::new)
        .transpose()
        .map_err(|err| PatientPersistenceError::query(err.to_string()))?;
    let gender = gender
        .map(|value| value.parse::<Gender>())
        .transpose()
        .map_err(|err| PatientPersistenceError::query(err.to_string()))?;
    let contact =
        ContactNumber::new(contact).map_err(|err| PatientPersistenceError::query(err.to_string()))?;

    Ok(Patient::new(
        PatientId::from_uuid(id),
        UserId::from_uuid(user_id),
        name,
        age,
        gender,
        contact,
        address,
    ))
}

/// Convert a joined row into a patient record with the account email.
fn row_to_record(
    (row, email): (PatientRow, String),
) -> Result<PatientRecord, PatientPersistenceError> {
    let email =
        EmailAddress::new(email).map_err(|err| PatientPersistenceError::query(err.to_string()))?;
    let patient = row_to_patient(row)?;
    Ok(PatientRecord { patient, email })
}

#[async_trait]
impl PatientRepository for DieselPatientRepository {
    async fn create_profile(
        &self,
        user_id: &UserId,
        profile: &NewPatientProfile,
    ) -> Result<Patient, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = Uuid::new_v4();
        let new_row = new_patient_row(id, *user_id.as_uuid(), profile);

        diesel::insert_into(patients::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_profile_insert_error)?;

        Ok(Patient::new(
            PatientId::from_uuid(id),
            user_id.clone(),
            profile.name.clone(),
            profile.age,
            profile.gender,
            profile.contact.clone(),
            profile.address.clone(),
        ))
    }

    async fn create_with_account(
        &self,
        email: &EmailAddress,
        password_hash: &str,
        profile: &NewPatientProfile,
    ) -> Result<PatientId, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user_id = Uuid::new_v4();
        let patient_id = Uuid::new_v4();

        let new_user = NewUserRow {
            id: user_id,
            email: email.as_ref(),
            password_hash,
            role: Role::Patient.as_str(),
        };
        let new_patient = new_patient_row(patient_id, user_id, profile);

        // Account and profile land together or not at all.
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(users::table)
                    .values(&new_user)
                    .execute(conn)
                    .await?;

                diesel::insert_into(patients::table)
                    .values(&new_patient)
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_account_insert_error)?;

        Ok(PatientId::from_uuid(patient_id))
    }

    async fn find(&self, id: PatientId) -> Result<Option<PatientRecord>, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = patients::table
            .inner_join(users::table)
            .filter(patients::id.eq(id.as_uuid()))
            .select((PatientRow::as_select(), users::email))
            .first::<(PatientRow, String)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PatientRecord>, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = patients::table
            .inner_join(users::table)
            .filter(patients::user_id.eq(user_id.as_uuid()))
            .select((PatientRow::as_select(), users::email))
            .first::<(PatientRow, String)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn update(
        &self,
        id: PatientId,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = to_changeset(update);

        let row = diesel::update(patients::table.filter(patients::id.eq(id.as_uuid())))
            .set(&changeset)
            .returning(PatientRow::as_returning())
            .get_result::<PatientRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_patient).transpose()
    }

    async fn update_by_user(
        &self,
        user_id: &UserId,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = to_changeset(update);

        let row = diesel::update(patients::table.filter(patients::user_id.eq(user_id.as_uuid())))
            .set(&changeset)
            .returning(PatientRow::as_returning())
            .get_result::<PatientRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_patient).transpose()
    }

    async fn delete(&self, id: PatientId) -> Result<bool, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Deleting the account cascades to the profile row.
        let owner = patients::table
            .filter(patients::id.eq(id.as_uuid()))
            .select(patients::user_id);

        let deleted = diesel::delete(users::table.filter(users::id.eq_any(owner)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<PatientRecord>, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(term);

        let rows: Vec<(PatientRow, String)> = patients::table
            .inner_join(users::table)
            .filter(
                patients::name
                    .ilike(pattern.clone())
                    .or(patients::contact.ilike(pattern.clone()))
                    .or(users::email.ilike(pattern)),
            )
            .order(patients::name.asc())
            .select((PatientRow::as_select(), users::email))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn count(&self) -> Result<i64, PatientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        patients::table
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
