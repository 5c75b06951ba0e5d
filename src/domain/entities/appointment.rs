//! Appointment slots for the "Today's Appointments" timeline.

/// One hour slot in the day timeline, booked or free.
#[derive(Debug, Clone)]
pub struct AppointmentSlot {
    /// Clock-face hour label (12-hour, no meridiem).
    pub hour: u8,
    /// Booking description when the slot is taken.
    pub booking: Option<String>,
}

impl AppointmentSlot {
    /// Creates a free slot.
    #[must_use]
    pub const fn free(hour: u8) -> Self {
        Self {
            hour,
            booking: None,
        }
    }

    /// Creates a booked slot.
    #[must_use]
    pub fn booked(hour: u8, label: impl Into<String>) -> Self {
        Self {
            hour,
            booking: Some(label.into()),
        }
    }
}
