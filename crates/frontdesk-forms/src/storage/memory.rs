//! In-memory marker store

use crate::storage::MarkerStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend
///
/// Fast but non-persistent - markers are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    markers: Arc<RwLock<HashMap<String, bool>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored markers
    pub async fn size(&self) -> usize {
        self.markers.read().await.len()
    }
}

#[async_trait]
impl MarkerStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.markers.read().await.get(key).copied())
    }

    async fn set(&self, key: &str, value: bool) -> Result<()> {
        self.markers.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.markers.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.markers.read().await.keys().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
