use async_trait::async_trait;
use rocksdb::{DB, Options, WriteBatch};
use tracing::debug;

use super::{Item, RecordStore, StoreError, check_query, item_key};
use crate::encoding::ItemValue;

/// RocksDB-backed record table
///
/// Several tables can share one database; rows are keyed `<table>/<key value>`.
pub struct RocksStore {
  db: DB,
  table_name: String,
  key_name: String,
}

impl RocksStore {
  /// Open (or create) the database at `path`
  pub fn open(path: &str, table_name: &str, key_name: &str) -> Result<Self, StoreError> {
    let mut opts = Options::default();
    opts.create_if_missing(true);
    let db = DB::open(&opts, path)?;

    Ok(Self {
      db,
      table_name: table_name.to_string(),
      key_name: key_name.to_string(),
    })
  }

  fn row_key(&self, value: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(self.table_name.len() + 1 + value.len());
    key.extend_from_slice(self.table_name.as_bytes());
    key.push(b'/');
    key.extend_from_slice(value.as_bytes());
    key
  }
}

#[async_trait]
impl RecordStore for RocksStore {
  async fn query(&self, key_name: &str, value: &str) -> Result<Vec<Item>, StoreError> {
    check_query(&self.key_name, key_name, value)?;

    match self.db.get(self.row_key(value))? {
      Some(bytes) => Ok(vec![ItemValue::deserialize(&bytes)?.item]),
      None => Ok(Vec::new()),
    }
  }

  async fn write_batch(&self, items: Vec<Item>) -> Result<Vec<Item>, StoreError> {
    let mut batch = WriteBatch::default();
    for item in &items {
      let key = self.row_key(item_key(&self.key_name, item)?);
      batch.put(key, ItemValue::new(item.clone()).serialize()?);
    }

    debug!("Writing {} items to table {}", items.len(), self.table_name);
    self.db.write(batch)?;
    Ok(Vec::new())
  }
}
