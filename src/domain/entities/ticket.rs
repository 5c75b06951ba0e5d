//! Ticket entities shown in the dashboard tables and the incident list.

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    /// Newly created, untriaged.
    New,
    /// Open and visible to the assignee.
    Open,
    /// Assigned to a technician.
    Assigned,
    /// Work in progress.
    Wip,
    /// Waiting on the requester or a third party.
    Pending,
    /// Work completed.
    Resolved,
}

impl TicketStatus {
    /// Label shown in ticket tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open",
            Self::Assigned => "Assigned",
            Self::Wip => "WIP",
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }
}

/// How urgent the "last update" badge should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateUrgency {
    /// Recently touched.
    Fresh,
    /// Getting old.
    Stale,
    /// Past due for attention.
    Overdue,
}

/// A ticket assigned to the signed-in technician.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: String,
    date: String,
    time: String,
    subject: String,
    requester: String,
    status: TicketStatus,
    last_update: String,
    urgency: UpdateUrgency,
}

impl Ticket {
    /// Creates a ticket record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        subject: impl Into<String>,
        requester: impl Into<String>,
        status: TicketStatus,
        last_update: impl Into<String>,
        urgency: UpdateUrgency,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            subject: subject.into(),
            requester: requester.into(),
            status,
            last_update: last_update.into(),
            urgency,
        }
    }

    /// Ticket number, e.g. `INC4568` or `RITM4321`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Opened date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Opened time of day.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// One-line subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Requesting user handle.
    #[must_use]
    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Current workflow status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Time since the last update, e.g. `23min`.
    #[must_use]
    pub fn last_update(&self) -> &str {
        &self.last_update
    }

    /// Urgency tint of the last-update badge.
    #[must_use]
    pub const fn urgency(&self) -> UpdateUrgency {
        self.urgency
    }
}

/// A ticket not yet assigned to anyone.
#[derive(Debug, Clone)]
pub struct UnassignedTicket {
    id: String,
    date: String,
    time: String,
    subject: String,
    requester: String,
    assigned_to: Option<String>,
}

impl UnassignedTicket {
    /// Creates an unassigned-ticket record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        subject: impl Into<String>,
        requester: impl Into<String>,
        assigned_to: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            subject: subject.into(),
            requester: requester.into(),
            assigned_to,
        }
    }

    /// Ticket number.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Opened date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Opened time of day.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// One-line subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Requesting user handle.
    #[must_use]
    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Technician a pickup was suggested for, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(TicketStatus::Wip.label(), "WIP");
        assert_eq!(TicketStatus::Pending.label(), "Pending");
    }

    #[test]
    fn test_ticket_accessors() {
        let ticket = Ticket::new(
            "INC4568",
            "04/12/23",
            "08:24AM",
            "Error when starting Microsoft Word",
            "Marso.27",
            TicketStatus::Wip,
            "23min",
            UpdateUrgency::Fresh,
        );
        assert_eq!(ticket.id(), "INC4568");
        assert_eq!(ticket.status(), TicketStatus::Wip);
        assert_eq!(ticket.urgency(), UpdateUrgency::Fresh);
    }
}
