// src/db/memory.rs
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewPasswordRecord, PasswordRecord};

use super::{StoreBackend, StoreError};

/// In-memory adapter backing the store trait with a keyed map. Used by the
/// service tests; carries no durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Arc<RwLock<HashMap<Uuid, PasswordRecord>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    async fn init(&mut self, _connection_string: &str) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_all_by_search_hash(
        &self,
        search_hash: &[u8],
    ) -> Result<Vec<PasswordRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|record| record.search_hash == search_hash)
            .cloned()
            .collect())
    }

    async fn insert_all(&self, staged: &[NewPasswordRecord]) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        for record in staged {
            let id = Uuid::new_v4();
            records.insert(
                id,
                PasswordRecord {
                    id,
                    password_hash: record.password_hash.clone(),
                    search_hash: record.search_hash.clone(),
                    complexity: record.complexity,
                    generated_at: record.generated_at,
                },
            );
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().await.len())
    }
}
