// src/core/service.rs
use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::crypto::{self, CryptoError};
use crate::db::{Database, StoreError};
use crate::models::{GeneratedPassword, NewPasswordRecord, PasswordRecord};
use crate::rules::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Hashing error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Orchestrates lookup-before-insert over the opaque store, enforcing at most
/// one stored record per distinct plaintext.
///
/// Each operation is a self-contained transaction over the store. The
/// lookup-then-insert sequence holds no lock, so two concurrent
/// [`persist_unique`](PasswordService::persist_unique) calls racing on the
/// same new plaintext can both pass the lookup and both insert.
pub struct PasswordService {
    db: Arc<Database>,
}

impl PasswordService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Finds the stored record verify-matching a plaintext, if any.
    ///
    /// The search hash narrows the candidate set; the argon2 verify picks the
    /// actual match out of it.
    async fn find_record(&self, password: &str) -> Result<Option<PasswordRecord>> {
        let search_hash = crypto::search_hash(password);
        let candidates = self.db.find_all_by_search_hash(&search_hash).await?;

        Ok(candidates
            .into_iter()
            .find(|record| crypto::verify_password(password, &record.password_hash)))
    }

    /// Returns the persisted projection of a plaintext, or `None` when it was
    /// never stored.
    pub async fn lookup(&self, password: &str) -> Result<Option<GeneratedPassword>> {
        Ok(self
            .find_record(password)
            .await?
            .map(|record| projection(password, &record)))
    }

    /// Deletes the record verify-matching a plaintext and returns its
    /// projection, or `None` when nothing matched.
    pub async fn delete(&self, password: &str) -> Result<Option<GeneratedPassword>> {
        match self.find_record(password).await? {
            Some(record) => {
                self.db.delete(record.id).await?;
                log::debug!("Deleted stored record {}", record.id);
                Ok(Some(projection(password, &record)))
            }
            None => Ok(None),
        }
    }

    /// Persists a batch, skipping entries whose plaintext is already stored
    /// or appeared earlier in the same batch. Returns the rejected entries in
    /// input order.
    ///
    /// The first occurrence of a repeated plaintext is the one staged; its
    /// later occurrences are reported as duplicates even though none of them
    /// were in the store at batch start. Staged records are inserted in a
    /// single store operation after the whole batch is scanned.
    pub async fn persist_unique(
        &self,
        passwords: &[GeneratedPassword],
    ) -> Result<Vec<GeneratedPassword>> {
        let mut rejected = Vec::new();
        let mut staged: Vec<NewPasswordRecord> = Vec::with_capacity(passwords.len());
        let mut staged_plaintexts: HashSet<&str> = HashSet::with_capacity(passwords.len());

        for entry in passwords {
            let duplicate = staged_plaintexts.contains(entry.password.as_str())
                || self.find_record(&entry.password).await?.is_some();

            if duplicate {
                rejected.push(entry.clone());
                continue;
            }

            // The slow one-way encode runs only for entries actually staged.
            let password_hash = crypto::encode_password(&entry.password)?;

            staged.push(NewPasswordRecord {
                password_hash,
                search_hash: crypto::search_hash(&entry.password).to_vec(),
                complexity: entry.complexity,
                generated_at: entry.generated_at,
            });
            staged_plaintexts.insert(entry.password.as_str());
        }

        self.db.insert_all(&staged).await?;

        log::debug!(
            "Persisted {} of {} passwords ({} duplicates)",
            staged.len(),
            passwords.len(),
            rejected.len()
        );

        Ok(rejected)
    }
}

fn projection(password: &str, record: &PasswordRecord) -> GeneratedPassword {
    GeneratedPassword {
        password: password.to_string(),
        complexity: record.complexity,
        generated_at: record.generated_at,
    }
}
