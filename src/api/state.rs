//! Application state shared by every handler

use std::sync::Arc;

use crate::domain::book::{Book, BookRepository};
use crate::domain::DomainError;
use crate::infrastructure::book::BookService;

/// Application state holding the injected book service
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<dyn BookServiceTrait>,
}

/// Trait for book service operations
#[async_trait::async_trait]
pub trait BookServiceTrait: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Book>, DomainError>;
    async fn create(&self, title: &str) -> Result<Book, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError>;
    async fn append_comment(&self, id: &str, comment: &str)
        -> Result<Option<Book>, DomainError>;
    async fn delete_by_id(&self, id: &str) -> Result<bool, DomainError>;
    async fn delete_all(&self) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: BookRepository + 'static> BookServiceTrait for BookService<R> {
    async fn list_all(&self) -> Result<Vec<Book>, DomainError> {
        BookService::list_all(self).await
    }

    async fn create(&self, title: &str) -> Result<Book, DomainError> {
        BookService::create(self, title).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError> {
        BookService::find_by_id(self, id).await
    }

    async fn append_comment(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<Option<Book>, DomainError> {
        BookService::append_comment(self, id, comment).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, DomainError> {
        BookService::delete_by_id(self, id).await
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        BookService::delete_all(self).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        BookService::count(self).await
    }
}

impl AppState {
    pub fn new(book_service: Arc<dyn BookServiceTrait>) -> Self {
        Self { book_service }
    }
}
