// src/db/mod.rs
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewPasswordRecord, PasswordRecord};

pub mod memory;
pub mod sqlite;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlx(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization error: {0}")]
    Init(String),
}

// Convert database-specific errors to our StoreError
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        StoreError::Sqlx(error.to_string())
    }
}

// Store backend trait - to be implemented by each backend type
pub trait StoreBackend: Send + Sync {
    // Initialize the backend from a connection string
    async fn init(&mut self, connection_string: &str) -> Result<(), StoreError>;

    // Record operations. The search hash is lossy, so a lookup returns every
    // record sharing the key; callers narrow the set with the verify hash.
    async fn find_all_by_search_hash(
        &self,
        search_hash: &[u8],
    ) -> Result<Vec<PasswordRecord>, StoreError>;

    // Insert a staged batch in one operation, assigning an id per record.
    async fn insert_all(&self, records: &[NewPasswordRecord]) -> Result<(), StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}

// Enum to hold specific backend implementations
#[derive(Debug, Clone)]
pub enum StoreType {
    Sqlite(sqlite::SqliteBackend),
    Memory(memory::MemoryBackend),
}

// The main store struct that uses the enum pattern instead of trait objects
#[derive(Clone)]
pub struct Database {
    pub backend: StoreType,
}

impl Database {
    // Create a new store from a connection string. `memory:` selects the
    // in-memory backend; everything else goes to SQLite.
    pub async fn new(connection_string: &str) -> Result<Self, StoreError> {
        if connection_string.starts_with("memory:") {
            let mut backend = memory::MemoryBackend::new();
            backend.init(connection_string).await?;
            Ok(Self {
                backend: StoreType::Memory(backend),
            })
        } else {
            let mut backend = sqlite::SqliteBackend::new();
            backend.init(connection_string).await?;
            Ok(Self {
                backend: StoreType::Sqlite(backend),
            })
        }
    }

    // Delegate methods to the appropriate backend type
    pub async fn find_all_by_search_hash(
        &self,
        search_hash: &[u8],
    ) -> Result<Vec<PasswordRecord>, StoreError> {
        match &self.backend {
            StoreType::Sqlite(backend) => backend.find_all_by_search_hash(search_hash).await,
            StoreType::Memory(backend) => backend.find_all_by_search_hash(search_hash).await,
        }
    }

    pub async fn insert_all(&self, records: &[NewPasswordRecord]) -> Result<(), StoreError> {
        match &self.backend {
            StoreType::Sqlite(backend) => backend.insert_all(records).await,
            StoreType::Memory(backend) => backend.insert_all(records).await,
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        match &self.backend {
            StoreType::Sqlite(backend) => backend.delete(id).await,
            StoreType::Memory(backend) => backend.delete(id).await,
        }
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        match &self.backend {
            StoreType::Sqlite(backend) => backend.count().await,
            StoreType::Memory(backend) => backend.count().await,
        }
    }

    pub fn get_backend_type(&self) -> &str {
        match &self.backend {
            StoreType::Sqlite(_) => "SQLite",
            StoreType::Memory(_) => "Memory",
        }
    }
}

// Function to initialize the store
pub async fn init_db(db_url: &str) -> Result<Database, StoreError> {
    Database::new(db_url).await
}
