//! Book infrastructure - storage-backed repository and service

mod repository;
mod service;

pub use repository::StorageBookRepository;
pub use service::BookService;
