//! Record store backends
//!
//! Every backend is a single-key table: items are JSON objects and exactly
//! one attribute (the key attribute, `user_id` by default) identifies them.

pub mod batch;
pub mod dynamo;
pub mod memory;
pub mod rocks;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::{Backend, Config};
use crate::encoding::DecodeError;

pub use batch::BatchWriter;
pub use dynamo::DynamoStore;
pub use memory::MemoryStore;
pub use rocks::RocksStore;

/// A stored item: one record as a JSON object
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Errors raised by record store backends
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Query condition missed key schema element: {0}")]
  KeySchema(String),
  #[error("One or more parameter values are not valid. The AttributeValue for a key attribute cannot contain an empty string value. Key: {0}")]
  EmptyKey(String),
  #[error("item is missing key attribute '{0}'")]
  MissingKey(String),
  #[error("key attribute '{0}' must be a string")]
  InvalidKey(String),
  #[error("batch write made no progress, {0} items left unprocessed")]
  Stalled(usize),
  #[error("{0}")]
  Backend(String),
  #[error(transparent)]
  Decode(#[from] DecodeError),
  #[error(transparent)]
  Rocks(#[from] rocksdb::Error),
  #[error("lock poisoned")]
  Poisoned,
}

/// Key-value table keyed by a single string attribute
#[async_trait]
pub trait RecordStore: Send + Sync {
  /// Return every item whose `key_name` attribute equals `value`, in store order
  async fn query(&self, key_name: &str, value: &str) -> Result<Vec<Item>, StoreError>;

  /// Write a batch of items, returning the ones the store did not process
  async fn write_batch(&self, items: Vec<Item>) -> Result<Vec<Item>, StoreError>;
}

/// Validate a key-equality query against the table's key attribute
pub(crate) fn check_query(table_key: &str, key_name: &str, value: &str) -> Result<(), StoreError> {
  if key_name != table_key {
    return Err(StoreError::KeySchema(table_key.to_string()));
  }
  if value.is_empty() {
    return Err(StoreError::EmptyKey(table_key.to_string()));
  }
  Ok(())
}

/// Extract the key attribute of an item about to be written
pub(crate) fn item_key<'a>(table_key: &str, item: &'a Item) -> Result<&'a str, StoreError> {
  match item.get(table_key) {
    Some(serde_json::Value::String(s)) if s.is_empty() => {
      Err(StoreError::EmptyKey(table_key.to_string()))
    }
    Some(serde_json::Value::String(s)) => Ok(s),
    Some(_) => Err(StoreError::InvalidKey(table_key.to_string())),
    None => Err(StoreError::MissingKey(table_key.to_string())),
  }
}

/// Open the store selected by the configuration
pub async fn open(config: &Config) -> Result<Arc<dyn RecordStore>, StoreError> {
  let store: Arc<dyn RecordStore> = match config.store.backend {
    Backend::Memory => {
      info!("Using in-memory record store");
      Arc::new(MemoryStore::new(&config.key_name))
    }
    Backend::RocksDb => {
      info!(
        "Opening RocksDB record store at {} (table {})",
        config.store.data_path, config.table_name
      );
      Arc::new(RocksStore::open(
        &config.store.data_path,
        &config.table_name,
        &config.key_name,
      )?)
    }
    Backend::DynamoDb => {
      info!("Connecting to DynamoDB table {}", config.table_name);
      Arc::new(DynamoStore::connect(&config.store, &config.table_name).await)
    }
  };
  Ok(store)
}
