//! Book domain module
//!
//! A book is a title plus an append-only list of comments. It is the only
//! document the library stores.

mod entity;
mod repository;
mod validation;

pub use entity::{Book, BookId};
pub use repository::BookRepository;
pub use validation::{validate_comment, validate_title, BookValidationError};

#[cfg(test)]
pub use repository::MockBookRepository;
