//! Ticket attachment entities.

/// Broad attachment category, used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// An image file.
    Image,
    /// Any other file.
    File,
}

/// A file attached to a ticket.
#[derive(Debug, Clone)]
pub struct Attachment {
    name: String,
    size: String,
    kind: AttachmentKind,
}

impl Attachment {
    /// Creates an attachment record.
    #[must_use]
    pub fn new(name: impl Into<String>, size: impl Into<String>, kind: AttachmentKind) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            kind,
        }
    }

    /// File name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable size, e.g. `2.4 MB`.
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Category.
    #[must_use]
    pub const fn kind(&self) -> AttachmentKind {
        self.kind
    }
}
