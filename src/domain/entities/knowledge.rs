//! Knowledge base articles.

/// A published knowledge base article.
#[derive(Debug, Clone)]
pub struct KbArticle {
    title: String,
    category: String,
    summary: String,
    updated: String,
}

impl KbArticle {
    /// Creates an article record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        summary: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            summary: summary.into(),
            updated: updated.into(),
        }
    }

    /// Article title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category tag.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// One-line summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Last updated date.
    #[must_use]
    pub fn updated(&self) -> &str {
        &self.updated
    }
}
