//! Book repository trait

use async_trait::async_trait;

use super::entity::{Book, BookId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Record-level persistence for books
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Finds a book by ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;

    /// Lists every stored book
    async fn list(&self) -> Result<Vec<Book>, DomainError>;

    /// Inserts a new book
    async fn create(&self, book: Book) -> Result<Book, DomainError>;

    /// Replaces a stored book
    async fn update(&self, book: Book) -> Result<Book, DomainError>;

    /// Deletes a book by ID, returns true if it existed
    async fn delete(&self, id: &BookId) -> Result<bool, DomainError>;

    /// Deletes every book
    async fn delete_all(&self) -> Result<(), DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
