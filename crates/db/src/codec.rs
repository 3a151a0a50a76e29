use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Serialized form of a whole collection as it is written to one storage slot.
pub trait CollectionCodec<R>: Send + Sync {
    fn encode(&self, items: &[R]) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<R>, CodecError>;
}

/// A JSON array of records.
pub struct JsonCodec<R> {
    _marker: PhantomData<fn() -> R>,
}

impl<R> JsonCodec<R> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<R> Default for JsonCodec<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CollectionCodec<R> for JsonCodec<R>
where
    R: Serialize + DeserializeOwned,
{
    fn encode(&self, items: &[R]) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(items)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<R>, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
