//! The owning collection of one record variant, mirrored to a storage slot.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    codec::{CodecError, CollectionCodec, JsonCodec},
    record::Record,
    storage::{KeyValueStorage, StorageError},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error for {key}: {source}")]
    Storage {
        key: String,
        #[source]
        source: StorageError,
    },
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: CodecError,
    },
    #[error("failed to decode {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: CodecError,
    },
}

/// What happened when the store read its slot at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    /// The slot has never been written.
    Missing,
    /// The slot could not be read or decoded; the store started empty.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

pub type Snapshot<R> = Arc<Vec<R>>;

/// Ordered in-memory collection that rewrites its whole slot on every mutation.
///
/// Mutation and persistence run under one lock, so writes to the slot never
/// overlap. Subscribers see each new snapshot before its write is issued. If
/// a write fails the in-memory change stands and the error is returned.
pub struct RecordStore<R: Record> {
    key: String,
    storage: Arc<dyn KeyValueStorage>,
    codec: Arc<dyn CollectionCodec<R>>,
    items: Mutex<Vec<R>>,
    updates: watch::Sender<Snapshot<R>>,
    load_status: LoadStatus,
}

impl<R: Record> RecordStore<R> {
    /// Opens the store with the variant's default key and JSON encoding.
    pub async fn open_default(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::open(storage, R::KIND.default_storage_key()).await
    }

    pub async fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self::open_with_codec(storage, key, Arc::new(JsonCodec::<R>::new())).await
    }

    pub async fn open_with_codec(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        codec: Arc<dyn CollectionCodec<R>>,
    ) -> Self {
        let key = key.into();
        let (items, load_status) = match Self::load(storage.as_ref(), &key, codec.as_ref()).await
        {
            Ok(Some(items)) => {
                info!(key = %key, count = items.len(), "Loaded records");
                let count = items.len();
                (items, LoadStatus::Loaded(count))
            }
            Ok(None) => {
                debug!(key = %key, "No persisted records");
                (Vec::new(), LoadStatus::Missing)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to load records, starting empty");
                (Vec::new(), LoadStatus::Failed(e.to_string()))
            }
        };

        let (updates, _) = watch::channel(Arc::new(items.clone()));
        Self {
            key,
            storage,
            codec,
            items: Mutex::new(items),
            updates,
            load_status,
        }
    }

    /// Reads and decodes one slot. `Ok(None)` means the slot is absent.
    pub async fn load(
        storage: &dyn KeyValueStorage,
        key: &str,
        codec: &dyn CollectionCodec<R>,
    ) -> Result<Option<Vec<R>>, StoreError> {
        let Some(bytes) = storage.read(key).await.map_err(|source| StoreError::Storage {
            key: key.to_string(),
            source,
        })?
        else {
            return Ok(None);
        };
        codec
            .decode(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> Vec<R> {
        (*self.snapshot()).clone()
    }

    pub fn snapshot(&self) -> Snapshot<R> {
        self.updates.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<R>> {
        self.updates.subscribe()
    }

    pub fn len(&self) -> usize {
        self.updates.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: Uuid) -> Option<R> {
        self.updates
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Replaces the record with the same id in place, or appends it.
    pub async fn upsert(&self, record: R) -> Result<UpsertOutcome, StoreError> {
        let mut items = self.items.lock().await;
        let id = record.id();
        let outcome = match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items[index] = record;
                UpsertOutcome::Replaced
            }
            None => {
                items.push(record);
                UpsertOutcome::Inserted
            }
        };
        self.publish(&items);
        debug!(key = %self.key, id = %id, outcome = ?outcome, "Upserted record");
        self.persist_locked(&items).await?;
        Ok(outcome)
    }

    /// Removes the record with `id`. Returns false, without writing, when absent.
    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut items = self.items.lock().await;
        let Some(index) = items.iter().position(|item| item.id() == id) else {
            return Ok(false);
        };
        items.remove(index);
        self.publish(&items);
        debug!(key = %self.key, id = %id, "Deleted record");
        self.persist_locked(&items).await?;
        Ok(true)
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let mut items = self.items.lock().await;
        items.clear();
        self.publish(&items);
        info!(key = %self.key, "Cleared records");
        self.persist_locked(&items).await
    }

    /// Rewrites the slot from the current collection.
    pub async fn persist(&self) -> Result<(), StoreError> {
        let items = self.items.lock().await;
        self.persist_locked(&items).await
    }

    fn publish(&self, items: &[R]) {
        self.updates.send_replace(Arc::new(items.to_vec()));
    }

    async fn persist_locked(&self, items: &[R]) -> Result<(), StoreError> {
        let result = match self.codec.encode(items) {
            Ok(bytes) => self
                .storage
                .write(&self.key, &bytes)
                .await
                .map_err(|source| StoreError::Storage {
                    key: self.key.clone(),
                    source,
                }),
            Err(source) => Err(StoreError::Encode {
                key: self.key.clone(),
                source,
            }),
        };
        if let Err(e) = &result {
            warn!(
                key = %self.key,
                count = items.len(),
                error = %e,
                "Failed to persist records; in-memory state is ahead of storage"
            );
        }
        result
    }
}
