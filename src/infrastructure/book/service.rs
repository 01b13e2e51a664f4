//! Book service - the record-level operations the HTTP layer calls

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::book::{validate_comment, Book, BookId, BookRepository};
use crate::domain::DomainError;

/// Book service for managing the library collection
pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every book
    pub async fn list_all(&self) -> Result<Vec<Book>, DomainError> {
        self.repository.list().await
    }

    /// Create a book with an empty comment list
    pub async fn create(&self, title: &str) -> Result<Book, DomainError> {
        let book = Book::new(title).map_err(|e| DomainError::validation(e.to_string()))?;

        info!(id = %book.id(), title = %book.title(), "Creating book");

        self.repository.create(book).await
    }

    /// Get a book by ID. Malformed IDs resolve to `None`.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError> {
        let Some(book_id) = parse_id(id) else {
            return Ok(None);
        };

        self.repository.find_by_id(&book_id).await
    }

    /// Append a comment and return the updated book.
    ///
    /// Reads the book then writes it back; two concurrent appends to the same
    /// book race and the later write wins.
    pub async fn append_comment(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<Option<Book>, DomainError> {
        validate_comment(comment).map_err(|e| DomainError::validation(e.to_string()))?;

        let Some(book_id) = parse_id(id) else {
            return Ok(None);
        };

        let Some(mut book) = self.repository.find_by_id(&book_id).await? else {
            return Ok(None);
        };

        book.add_comment(comment)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        debug!(id = %book_id, comments = book.comment_count(), "Appending comment");

        match self.repository.update(book).await {
            Ok(book) => Ok(Some(book)),
            // deleted between the read and the write
            Err(DomainError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete a book, returns false when no book matched
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, DomainError> {
        let Some(book_id) = parse_id(id) else {
            return Ok(false);
        };

        info!(id = %book_id, "Deleting book");

        self.repository.delete(&book_id).await
    }

    /// Delete every book. Succeeds on an empty collection.
    pub async fn delete_all(&self) -> Result<(), DomainError> {
        info!("Deleting all books");

        self.repository.delete_all().await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

fn parse_id(id: &str) -> Option<BookId> {
    match BookId::parse(id) {
        Ok(book_id) => Some(book_id),
        Err(e) => {
            debug!(id = %id, error = %e, "Ignoring malformed book id");
            None
        }
    }
}
