// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::complexity::Complexity;

/// A freshly generated password together with its batch complexity label.
/// Immutable once produced; the persistence service either derives a stored
/// record from it or discards it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub complexity: Complexity,
    pub generated_at: DateTime<Utc>,
}

/// A persisted password record. The plaintext itself is never stored; only
/// the argon2 verification hash and the lossy search hash derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub id: Uuid,
    pub password_hash: String,
    pub search_hash: Vec<u8>,
    pub complexity: Complexity,
    pub generated_at: DateTime<Utc>,
}

/// A record staged for insertion. The store assigns the id on insert.
#[derive(Debug, Clone)]
pub struct NewPasswordRecord {
    pub password_hash: String,
    pub search_hash: Vec<u8>,
    pub complexity: Complexity,
    pub generated_at: DateTime<Utc>,
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub lower_case: bool,
    pub upper_case: bool,
    pub special_case: bool,
    pub amount: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lower_case: true,
            upper_case: true,
            special_case: true,
            amount: 1,
        }
    }
}
