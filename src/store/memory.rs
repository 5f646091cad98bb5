use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{Item, RecordStore, StoreError, check_query, item_key};

/// In-memory record table
pub struct MemoryStore {
  key_name: String,
  data: RwLock<HashMap<String, Item>>,
}

impl MemoryStore {
  /// Create a new empty table keyed by `key_name`
  pub fn new(key_name: impl Into<String>) -> Self {
    Self {
      key_name: key_name.into(),
      data: RwLock::new(HashMap::new()),
    }
  }

  /// Insert or replace an item
  pub fn put(&self, item: Item) -> Result<(), StoreError> {
    let key = item_key(&self.key_name, &item)?.to_string();
    let mut data = self.data.write().map_err(|_| StoreError::Poisoned)?;
    data.insert(key, item);
    Ok(())
  }

  /// Number of stored items
  pub fn len(&self) -> usize {
    self.data.read().map(|data| data.len()).unwrap_or(0)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl RecordStore for MemoryStore {
  async fn query(&self, key_name: &str, value: &str) -> Result<Vec<Item>, StoreError> {
    check_query(&self.key_name, key_name, value)?;
    let data = self.data.read().map_err(|_| StoreError::Poisoned)?;
    Ok(data.get(value).cloned().into_iter().collect())
  }

  async fn write_batch(&self, items: Vec<Item>) -> Result<Vec<Item>, StoreError> {
    for item in items {
      self.put(item)?;
    }
    Ok(Vec::new())
  }
}
