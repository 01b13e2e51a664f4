//! Books API - `/api/books` collection and `/api/books/{id}` item routes

mod handlers;

pub use handlers::{
    add_comment, create_book, delete_all_books, delete_book, get_book, list_books,
};

use axum::{routing::get, Router};

use super::state::AppState;

/// Create the books router, nested under `/api`
pub fn create_books_router() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).delete(delete_all_books),
        )
        .route(
            "/books/{id}",
            get(get_book).post(add_comment).delete(delete_book),
        )
}
