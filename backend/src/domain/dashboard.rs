//! Read-only dashboard aggregates.
//!
//! Counts use `i64` because they come straight from SQL `COUNT`, which is
//! signed on the wire.

use crate::domain::doctor::Doctor;
use crate::domain::email::EmailAddress;
use crate::domain::patient::Patient;

/// Appointment counts across the whole store, for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentTotals {
    /// All appointments regardless of status.
    pub total: i64,
    /// Appointments with status `upcoming`.
    pub upcoming: i64,
    /// Appointments with status `completed`.
    pub completed: i64,
    /// Distinct patients holding at least one upcoming appointment.
    pub active_patients: i64,
}

/// Appointment counts scoped to one patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatientAppointmentCounts {
    /// Upcoming appointments for the patient.
    pub upcoming: i64,
    /// Completed appointments for the patient.
    pub completed: i64,
}

/// Appointment statistics scoped to one doctor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoctorAppointmentStats {
    /// All appointments assigned to the doctor.
    pub total: i64,
    /// Upcoming appointments for the doctor.
    pub upcoming: i64,
    /// Completed appointments for the doctor.
    pub completed: i64,
    /// Distinct patients seen across all the doctor's appointments.
    pub unique_patients: i64,
}

/// Admin dashboard payload: directory totals plus appointment counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminDashboard {
    /// Doctor profiles on record.
    pub total_doctors: i64,
    /// Patient profiles on record.
    pub total_patients: i64,
    /// All appointments regardless of status.
    pub total_appointments: i64,
    /// Appointments with status `upcoming`.
    pub upcoming_appointments: i64,
    /// Appointments with status `completed`.
    pub completed_appointments: i64,
    /// Distinct patients holding at least one upcoming appointment.
    pub active_patients: i64,
}

/// Patient dashboard payload: own profile plus appointment counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDashboard {
    /// The patient's profile.
    pub patient: Patient,
    /// Login email of the owning account.
    pub email: EmailAddress,
    /// Upcoming appointments for the patient.
    pub upcoming_appointments: i64,
    /// Completed appointments, reported to the patient as past visits.
    pub past_appointments: i64,
}

/// Doctor dashboard payload: own profile plus appointment statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDashboard {
    /// The doctor's profile.
    pub doctor: Doctor,
    /// Login email of the owning account.
    pub email: EmailAddress,
    /// All appointments assigned to the doctor.
    pub total_appointments: i64,
    /// Upcoming appointments for the doctor.
    pub upcoming_appointments: i64,
    /// Completed appointments for the doctor.
    pub completed_appointments: i64,
    /// Distinct patients seen across all the doctor's appointments.
    pub unique_patients: i64,
}
