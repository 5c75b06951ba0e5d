//! Activity log entries for the ticket detail Activities tab.

/// Kind of change an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// A status transition, e.g. New to Open.
    StatusChange,
    /// Ticket creation.
    Created,
    /// Assignment to a technician.
    Assigned,
}

impl ActivityKind {
    /// Glyph marking the entry in the timeline.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::StatusChange => "✓",
            Self::Created => "+",
            Self::Assigned => "✎",
        }
    }
}

/// One row in a ticket's activity log.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    kind: ActivityKind,
    title: String,
    actor: String,
    timestamp: String,
}

impl ActivityEntry {
    /// Creates an activity record.
    #[must_use]
    pub fn new(
        kind: ActivityKind,
        title: impl Into<String>,
        actor: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            actor: actor.into(),
            timestamp: timestamp.into(),
        }
    }

    /// What happened.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Human-readable summary.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Who caused the change.
    #[must_use]
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// When it happened.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
