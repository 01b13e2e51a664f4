//! Request and response types for the HTTP API

mod book;
mod error;
mod payload;

pub use book::{
    AddCommentRequest, BookDetail, BookSummary, CommentedBook, CreateBookRequest, CreatedBook,
};
pub use error::{ApiError, INTERNAL_SERVER_ERROR, NO_BOOK_EXISTS};
pub use payload::Payload;
