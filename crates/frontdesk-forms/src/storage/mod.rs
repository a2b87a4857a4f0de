//! Storage backends for duplicate-submission markers
//!
//! Stands in for browser local storage: a flat key/boolean store scoped to
//! one device.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::{StorageBackend, StorageConfig};

pub mod filesystem;
pub mod memory;

pub use filesystem::FilesystemStore;
pub use memory::MemoryStore;

/// Trait for marker storage backends
#[async_trait]
pub trait MarkerStore: Send + Sync {
    /// Get a marker by key
    async fn get(&self, key: &str) -> Result<Option<bool>>;

    /// Set a marker
    async fn set(&self, key: &str, value: bool) -> Result<()>;

    /// Delete a marker
    async fn remove(&self, key: &str) -> Result<()>;

    /// Get all marker keys
    async fn keys(&self) -> Result<Vec<String>>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

/// Build the store selected by configuration
pub async fn open(config: &StorageConfig) -> Result<Arc<dyn MarkerStore>> {
    let store: Arc<dyn MarkerStore> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::Filesystem => Arc::new(FilesystemStore::new(&config.path).await?),
    };
    tracing::debug!(backend = store.name(), "marker store opened");
    Ok(store)
}
