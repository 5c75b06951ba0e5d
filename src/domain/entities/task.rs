//! Technician task entities for the "My Tasks" card.

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Actively being worked on.
    InProgress,
    /// Assigned but not started.
    Assigned,
}

impl TaskStatus {
    /// Label shown in the task list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Assigned => "Assigned",
        }
    }
}

/// A work item assigned to the signed-in technician.
#[derive(Debug, Clone)]
pub struct TaskItem {
    id: String,
    date: String,
    time: String,
    subject: String,
    status: TaskStatus,
}

impl TaskItem {
    /// Creates a task record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        subject: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            subject: subject.into(),
            status,
        }
    }

    /// Task number, e.g. `TASK3596`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Created date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Created time of day.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// One-line subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Progress state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}
