//! Infrastructure layer - storage backends, repositories and services

pub mod book;
pub mod logging;
pub mod storage;
