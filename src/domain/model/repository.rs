//! Catalogue repository trait

use async_trait::async_trait;

use super::ModelEntry;
use crate::domain::DomainError;

/// Repository trait for the model catalogue.
///
/// Enumeration preserves insertion order.
#[async_trait]
pub trait CatalogueRepository: Send + Sync + std::fmt::Debug {
    /// Get an entry by ID
    async fn find(&self, id: &str) -> Result<Option<ModelEntry>, DomainError>;

    /// Get all entries in insertion order
    async fn list(&self) -> Result<Vec<ModelEntry>, DomainError>;

    /// Add a new entry; fails when the ID is already registered
    async fn insert(&self, entry: ModelEntry) -> Result<ModelEntry, DomainError>;

    /// Delete and return the entry with the given ID
    async fn remove(&self, id: &str) -> Result<ModelEntry, DomainError>;

    /// Check if an entry exists
    async fn exists(&self, id: &str) -> Result<bool, DomainError>;
}

/// In-memory implementation of CatalogueRepository
pub mod in_memory {
    use super::*;
    use std::sync::Mutex;

    /// In-memory catalogue guarded by a single coarse lock.
    ///
    /// Entries are held in a Vec so `list` keeps insertion order; lookups
    /// are linear scans, which is fine at catalogue scale.
    #[derive(Debug, Default)]
    pub struct InMemoryCatalogue {
        entries: Mutex<Vec<ModelEntry>>,
    }

    impl InMemoryCatalogue {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed the catalogue with a fixed starting set
        pub fn with_entries(entries: Vec<ModelEntry>) -> Self {
            Self {
                entries: Mutex::new(entries),
            }
        }
    }

    #[async_trait]
    impl CatalogueRepository for InMemoryCatalogue {
        async fn find(&self, id: &str) -> Result<Option<ModelEntry>, DomainError> {
            let entries = self.entries.lock().unwrap();
            Ok(entries.iter().find(|e| e.id().as_str() == id).cloned())
        }

        async fn list(&self) -> Result<Vec<ModelEntry>, DomainError> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn insert(&self, entry: ModelEntry) -> Result<ModelEntry, DomainError> {
            let mut entries = self.entries.lock().unwrap();

            if entries.iter().any(|e| e.id() == entry.id()) {
                return Err(DomainError::conflict(format!(
                    "Model with id '{}' already exists",
                    entry.id()
                )));
            }

            entries.push(entry.clone());
            Ok(entry)
        }

        async fn remove(&self, id: &str) -> Result<ModelEntry, DomainError> {
            let mut entries = self.entries.lock().unwrap();

            match entries.iter().position(|e| e.id().as_str() == id) {
                Some(index) => Ok(entries.remove(index)),
                None => Err(DomainError::not_found(format!(
                    "Model '{}' not found",
                    id
                ))),
            }
        }

        async fn exists(&self, id: &str) -> Result<bool, DomainError> {
            let entries = self.entries.lock().unwrap();
            Ok(entries.iter().any(|e| e.id().as_str() == id))
        }
    }

}
