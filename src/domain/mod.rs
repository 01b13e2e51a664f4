//! Domain layer - entities, repository traits and errors

pub mod book;
pub mod error;
pub mod storage;

pub use book::{Book, BookId, BookRepository, BookValidationError};
pub use error::DomainError;
pub use storage::{Storage, StorageEntity, StorageKey};
