//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

#[derive(Debug)]
struct Collection<E> {
    documents: HashMap<String, (u64, E)>,
    next_seq: u64,
}

/// Thread-safe in-memory document collection
///
/// Listing returns documents in insertion order, the same order the
/// PostgreSQL backend yields. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    collection: RwLock<Collection<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    pub fn new() -> Self {
        Self {
            collection: RwLock::new(Collection {
                documents: HashMap::new(),
                next_seq: 0,
            }),
        }
    }
}

fn read_lock_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Failed to acquire read lock: {}", e))
}

fn write_lock_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Failed to acquire write lock: {}", e))
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let collection = self.collection.read().map_err(read_lock_error)?;

        Ok(collection
            .documents
            .get(key.as_str())
            .map(|(_, entity)| entity.clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let collection = self.collection.read().map_err(read_lock_error)?;

        let mut documents: Vec<&(u64, E)> = collection.documents.values().collect();
        documents.sort_by_key(|(seq, _)| *seq);

        Ok(documents.into_iter().map(|(_, entity)| entity.clone()).collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut collection = self.collection.write().map_err(write_lock_error)?;

        if collection.documents.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Document with key '{}' already exists",
                key
            )));
        }

        let seq = collection.next_seq;
        collection.next_seq += 1;
        collection.documents.insert(key, (seq, entity.clone()));
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut collection = self.collection.write().map_err(write_lock_error)?;

        match collection.documents.get_mut(&key) {
            Some((_, stored)) => {
                *stored = entity.clone();
                Ok(entity)
            }
            None => Err(DomainError::not_found(format!(
                "Document with key '{}' not found",
                key
            ))),
        }
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut collection = self.collection.write().map_err(write_lock_error)?;

        Ok(collection.documents.remove(key.as_str()).is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut collection = self.collection.write().map_err(write_lock_error)?;

        collection.documents.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let collection = self.collection.read().map_err(read_lock_error)?;

        Ok(collection.documents.len())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let collection = self.collection.read().map_err(read_lock_error)?;

        Ok(collection.documents.contains_key(key.as_str()))
    }
}
