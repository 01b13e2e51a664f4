//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{
    AddCommentRequest, ApiError, BookDetail, BookSummary, CommentedBook, CreateBookRequest,
    CreatedBook, Payload,
};

pub const COMPLETE_DELETE_SUCCESSFUL: &str = "complete delete successful";
pub const DELETE_SUCCESSFUL: &str = "delete successful";

/// GET /api/books
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookSummary>>, ApiError> {
    let books = state.book_service.list_all().await?;

    debug!(count = books.len(), "Listing books");

    Ok(Json(books.iter().map(BookSummary::from).collect()))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    Payload(request): Payload<CreateBookRequest>,
) -> Result<Json<CreatedBook>, ApiError> {
    let title = request.title();
    let book = state.book_service.create(&title).await?;

    Ok(Json(CreatedBook::from(&book)))
}

/// DELETE /api/books
pub async fn delete_all_books(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state.book_service.delete_all().await?;

    Ok(COMPLETE_DELETE_SUCCESSFUL)
}

/// GET /api/books/:id
///
/// Any failure to load the book, including a store error, reads as
/// "no book exists" on this route.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail>, ApiError> {
    match state.book_service.find_by_id(&id).await {
        Ok(Some(book)) => Ok(Json(BookDetail::from(&book))),
        Ok(None) => Err(ApiError::no_book()),
        Err(e) => {
            warn!(book_id = %id, error = %e, "Failed to load book");
            Err(ApiError::no_book())
        }
    }
}

/// POST /api/books/:id
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(request): Payload<AddCommentRequest>,
) -> Result<Json<CommentedBook>, ApiError> {
    let comment = request.comment();

    let book = state
        .book_service
        .append_comment(&id, &comment)
        .await?
        .ok_or_else(ApiError::no_book)?;

    Ok(Json(CommentedBook::from(&book)))
}

/// DELETE /api/books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    if !state.book_service.delete_by_id(&id).await? {
        return Err(ApiError::no_book());
    }

    Ok(DELETE_SUCCESSFUL)
}
