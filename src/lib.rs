//! Personal Library API
//!
//! A small HTTP service tracking books and the comments readers leave on
//! them. Books live in a document collection, either in memory or in a
//! PostgreSQL table of JSONB documents.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{Book, Storage};
use infrastructure::book::{BookService, StorageBookRepository};
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Name of the collection holding books
pub const BOOKS_COLLECTION: &str = "books";

/// Connect to the configured store and build the application state.
///
/// The store is reached once here; an unreachable store is an error.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage_config()?;

    info!(backend = ?storage_config.storage_type(), "Storage backend");

    let storage = StorageFactory::create::<Book>(&storage_config, BOOKS_COLLECTION).await?;

    Ok(build_app_state(storage))
}

/// Build the application state around an existing book collection
pub fn build_app_state(storage: Arc<dyn Storage<Book>>) -> AppState {
    let repository = Arc::new(StorageBookRepository::new(storage));
    let book_service = Arc::new(BookService::new(repository));

    AppState::new(book_service)
}
