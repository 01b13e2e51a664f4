//! Book entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_comment, validate_title, BookValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Book identifier, assigned once when the book is created.
///
/// Rendered as a lowercase hyphenated UUID. Anything that does not parse as a
/// UUID can never name a stored book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId(String);

impl BookId {
    /// Generate a fresh identifier for a new book
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse a caller-supplied identifier
    pub fn parse(id: &str) -> Result<Self, BookValidationError> {
        Uuid::parse_str(id)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| BookValidationError::InvalidId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookId {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for BookId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Book entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    /// Insertion ordered, duplicates allowed
    #[serde(default)]
    comments: Vec<String>,
}

impl Book {
    /// Create a new book with no comments
    pub fn new(title: impl Into<String>) -> Result<Self, BookValidationError> {
        let title = title.into();
        validate_title(&title)?;

        Ok(Self {
            id: BookId::generate(),
            title,
            comments: Vec::new(),
        })
    }

    // Getters

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    // Mutators

    /// Append a comment to the end of the list
    pub fn add_comment(&mut self, comment: impl Into<String>) -> Result<(), BookValidationError> {
        let comment = comment.into();
        validate_comment(&comment)?;
        self.comments.push(comment);
        Ok(())
    }
}

impl StorageEntity for Book {
    type Key = BookId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
