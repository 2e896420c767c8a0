// src/db/sqlite.rs
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

use crate::complexity::Complexity;
use crate::models::{NewPasswordRecord, PasswordRecord};

use super::{StoreBackend, StoreError};

#[derive(Debug, Clone)]
pub struct SqliteBackend {
    pool: Option<SqlitePool>,
    connection_string: Option<String>,
}

impl SqliteBackend {
    pub fn new() -> Self {
        Self {
            pool: None,
            connection_string: None,
        }
    }

    // Helper to get the pool or return an error
    fn get_pool(&self) -> Result<&SqlitePool, StoreError> {
        self.pool
            .as_ref()
            .ok_or(StoreError::Init("Database not initialized".into()))
    }

    fn record_from_row(row: &SqliteRow) -> Result<PasswordRecord, StoreError> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id)
            .map_err(|e| StoreError::Sqlx(format!("Invalid record id: {e}")))?;

        let complexity: String = row.try_get("complexity")?;
        let complexity = Complexity::from_str(&complexity).map_err(StoreError::Sqlx)?;

        let generated_at: String = row.try_get("generated_at")?;
        let generated_at = DateTime::parse_from_rfc3339(&generated_at)
            .map_err(|e| StoreError::Sqlx(format!("Invalid timestamp: {e}")))?
            .with_timezone(&Utc);

        Ok(PasswordRecord {
            id,
            password_hash: row.try_get("password_hash")?,
            search_hash: row.try_get("search_hash")?,
            complexity,
            generated_at,
        })
    }
}

impl StoreBackend for SqliteBackend {
    async fn init(&mut self, connection_string: &str) -> Result<(), StoreError> {
        self.connection_string = Some(connection_string.to_string());

        let db_path = connection_string
            .strip_prefix("sqlite:")
            .ok_or(StoreError::Config("Invalid SQLite connection string".into()))?;

        // Create the database directory if it doesn't exist
        if db_path != ":memory:" {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        StoreError::Init(format!("Failed to create database directory: {e}"))
                    })?;
                }
            }
        }

        log::info!("Initializing SQLite database at: {}", db_path);

        let options = SqliteConnectOptions::from_str(connection_string)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // Create the passwords table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS passwords (
                id TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                search_hash BLOB NOT NULL,
                complexity TEXT NOT NULL,
                generated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await?;

        // The search hash is the lookup key; index it so a lookup never scans
        // the whole table
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_passwords_search_hash ON passwords(search_hash);",
        )
        .execute(&pool)
        .await?;

        self.pool = Some(pool);
        Ok(())
    }

    async fn find_all_by_search_hash(
        &self,
        search_hash: &[u8],
    ) -> Result<Vec<PasswordRecord>, StoreError> {
        let pool = self.get_pool()?;

        let rows = sqlx::query(
            r#"
            SELECT id, password_hash, search_hash, complexity, generated_at
            FROM passwords
            WHERE search_hash = ?
            "#,
        )
        .bind(search_hash)
        .fetch_all(pool)
        .await?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn insert_all(&self, records: &[NewPasswordRecord]) -> Result<(), StoreError> {
        let pool = self.get_pool()?;

        let mut tx = pool.begin().await?;

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO passwords (id, password_hash, search_hash, complexity, generated_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&record.password_hash)
            .bind(&record.search_hash)
            .bind(record.complexity.to_string())
            .bind(record.generated_at.to_rfc3339())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let pool = self.get_pool()?;

        sqlx::query("DELETE FROM passwords WHERE id = ?")
            .bind(id.to_string())
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let pool = self.get_pool()?;

        let row = sqlx::query("SELECT COUNT(*) AS n FROM passwords")
            .fetch_one(pool)
            .await?;

        let n: i64 = row.try_get("n")?;
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn record(password_hash: &str, search_hash: &[u8]) -> NewPasswordRecord {
        NewPasswordRecord {
            password_hash: password_hash.to_string(),
            search_hash: search_hash.to_vec(),
            complexity: Complexity::Medium,
            generated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn sqlite_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("passforge_test.db").display());
        let db = Database::new(&url).await.unwrap();

        let shared_hash = [7u8; 16];
        db.insert_all(&[
            record("hash-a", &shared_hash),
            record("hash-b", &shared_hash),
            record("hash-c", &[9u8; 16]),
        ])
        .await
        .unwrap();

        assert_eq!(db.count().await.unwrap(), 3);

        let found = db.find_all_by_search_hash(&shared_hash).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.search_hash == shared_hash));
        assert!(found.iter().all(|r| r.complexity == Complexity::Medium));

        db.delete(found[0].id).await.unwrap();
        assert_eq!(db.count().await.unwrap(), 2);
        assert_eq!(db.find_all_by_search_hash(&shared_hash).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn timestamps_survive_the_text_column() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("passforge_ts.db").display());
        let db = Database::new(&url).await.unwrap();

        let mut staged = record("hash-ts", &[1u8; 16]);
        staged.generated_at = "2020-04-15T05:05:00Z".parse::<DateTime<Utc>>().unwrap();
        db.insert_all(&[staged.clone()]).await.unwrap();

        let found = db.find_all_by_search_hash(&[1u8; 16]).await.unwrap();
        assert_eq!(found[0].generated_at, staged.generated_at);
    }
}
