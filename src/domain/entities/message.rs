//! Conversation messages in a ticket thread.

/// Who sent a thread message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderKind {
    /// Automated system bot.
    Bot,
    /// The requesting end user.
    Requester,
    /// A service desk agent.
    Agent,
}

/// One message in a ticket's conversation thread.
#[derive(Debug, Clone)]
pub struct ThreadMessage {
    sender: String,
    kind: SenderKind,
    body: String,
    sent_at: String,
}

impl ThreadMessage {
    /// Creates a message record.
    #[must_use]
    pub fn new(
        sender: impl Into<String>,
        kind: SenderKind,
        body: impl Into<String>,
        sent_at: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            kind,
            body: body.into(),
            sent_at: sent_at.into(),
        }
    }

    /// Display name of the sender.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Sender category.
    #[must_use]
    pub const fn kind(&self) -> SenderKind {
        self.kind
    }

    /// Message text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Read-receipt timestamp line.
    #[must_use]
    pub fn sent_at(&self) -> &str {
        &self.sent_at
    }
}
