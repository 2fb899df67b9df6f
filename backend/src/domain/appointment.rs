//! Appointment vocabulary used by the dashboard aggregator.
//!
//! Appointments are written by an external scheduler; this service only reads
//! them. Storage keeps the status as free text, so the aggregator matches the
//! literal strings below and ignores anything else.

/// Appointment states the dashboards aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    /// Booked and not yet held.
    Upcoming,
    /// Held and closed out.
    Completed,
}

impl AppointmentStatus {
    /// Literal stored in the appointments table.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
