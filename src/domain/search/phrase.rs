//! Search phrase value type

use std::fmt;

use crate::domain::DomainError;

/// A user supplied search term, trimmed and lowercased.
///
/// All comparisons against titles and summary text go through
/// [`Phrase::is_in`], which is case-insensitive on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase(String);

impl Phrase {
    /// Create a new Phrase, rejecting input that is blank after trimming
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = raw.as_ref().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainError::validation("Search phrase cannot be empty"));
        }

        Ok(Self(normalized))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this phrase occurs anywhere inside `text`, ignoring case
    pub fn is_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.0
    }
}
