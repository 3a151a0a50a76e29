//! Local key/value slots holding one serialized collection per key.

use async_trait::async_trait;
use dashmap::DashMap;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::DBService;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A flat, named-slot storage. Every write replaces the slot's whole content.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    async fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Slots stored as rows of the `storage_slots` table.
#[derive(Clone)]
pub struct SqliteSlotStorage {
    pool: SqlitePool,
}

impl SqliteSlotStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl From<&DBService> for SqliteSlotStorage {
    fn from(db: &DBService) -> Self {
        Self::new(db.pool.clone())
    }
}

#[async_trait]
impl KeyValueStorage for SqliteSlotStorage {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let row: Option<(Vec<u8>,)> =
            sqlx::query_as("SELECT value FROM storage_slots WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO storage_slots (key, value)
               VALUES ($1, $2)
               ON CONFLICT(key) DO UPDATE
               SET value = excluded.value,
                   updated_at = datetime('now', 'subsec')"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM storage_slots WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Process-local slots; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: DashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.get(key).map(|slot| slot.value().clone()))
    }

    async fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}
