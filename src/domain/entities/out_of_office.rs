//! Out-of-office request entities.

/// Approval state of an out-of-office request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// Approved by a supervisor.
    Approved,
    /// Awaiting review.
    Pending,
    /// Declined.
    Rejected,
}

impl RequestStatus {
    /// Label shown in the recent-requests card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

/// A submitted out-of-office request.
#[derive(Debug, Clone)]
pub struct OutOfOfficeRequest {
    start_date: String,
    end_date: String,
    reason: String,
    status: RequestStatus,
}

impl OutOfOfficeRequest {
    /// Creates a request record.
    #[must_use]
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        reason: impl Into<String>,
        status: RequestStatus,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            reason: reason.into(),
            status,
        }
    }

    /// First day of absence.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Last day of absence.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Free-text reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Approval state.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }
}
