//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// User accounts table.
    ///
    /// Stores login credentials and the role that gates every request.
    /// The `id` column is the primary key (UUID v4).
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Normalised email address, unique across all accounts.
        email -> Text,
        /// Argon2 hash of the account password.
        password_hash -> Text,
        /// Account role: `admin`, `doctor`, or `patient`.
        role -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Patient profiles table.
    ///
    /// One row per patient account; `user_id` is unique so a second profile
    /// for the same account fails at the constraint.
    patients (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning account, unique per profile.
        user_id -> Uuid,
        /// Patient's full name.
        name -> Text,
        /// Age in years, if recorded.
        age -> Nullable<Int4>,
        /// Gender label, if recorded.
        gender -> Nullable<Text>,
        /// Contact phone number.
        contact -> Text,
        /// Postal address.
        address -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Doctor profiles table.
    ///
    /// One row per doctor account, provisioned by administrators.
    doctors (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning account, unique per profile.
        user_id -> Uuid,
        /// Doctor's full name.
        name -> Text,
        /// Medical specialisation.
        specialization -> Text,
        /// Contact phone number.
        contact -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Hospital departments table.
    departments (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Department name.
        name -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Appointments table.
    ///
    /// Rows are written by the scheduling system; this service only reads
    /// them for dashboard aggregation.
    appointments (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Patient the appointment belongs to.
        patient_id -> Uuid,
        /// Doctor the appointment belongs to.
        doctor_id -> Uuid,
        /// Appointment status: `upcoming` or `completed`.
        status -> Text,
        /// Scheduled date and time.
        scheduled_at -> Timestamptz,
    }
}

diesel::joinable!(patients -> users (user_id));
diesel::joinable!(doctors -> users (user_id));
diesel::joinable!(appointments -> patients (patient_id));
diesel::joinable!(appointments -> doctors (doctor_id));

diesel::allow_tables_to_appear_in_same_query!(
    appointments,
    departments,
    doctors,
    patients,
    users,
);
