//! Storage-backed book repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::book::{Book, BookId, BookRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of BookRepository
#[derive(Debug)]
pub struct StorageBookRepository {
    storage: Arc<dyn Storage<Book>>,
}

impl StorageBookRepository {
    pub fn new(storage: Arc<dyn Storage<Book>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl BookRepository for StorageBookRepository {
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        self.storage.get(id).await
    }

    async fn list(&self) -> Result<Vec<Book>, DomainError> {
        self.storage.list().await
    }

    async fn create(&self, book: Book) -> Result<Book, DomainError> {
        self.storage.create(book).await
    }

    async fn update(&self, book: Book) -> Result<Book, DomainError> {
        self.storage.update(book).await
    }

    async fn delete(&self, id: &BookId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.storage.clear().await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }
}
