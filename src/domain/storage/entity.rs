//! Document traits for entities kept in a [`Storage`](super::Storage) collection

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Identifier of a document inside a collection
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as the string backends index documents by
    fn as_str(&self) -> &str;
}

/// A document that round-trips through a JSON store
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    type Key: StorageKey;

    fn key(&self) -> &Self::Key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    struct ShelfId(String);

    impl StorageKey for ShelfId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct Shelf {
        id: ShelfId,
        label: String,
    }

    impl StorageEntity for Shelf {
        type Key = ShelfId;

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    #[test]
    fn test_entity_exposes_its_key() {
        let shelf = Shelf {
            id: ShelfId("shelf-1".to_string()),
            label: "Fiction".to_string(),
        };

        assert_eq!(shelf.key().as_str(), "shelf-1");
        assert_eq!(shelf.label, "Fiction");
    }
}
