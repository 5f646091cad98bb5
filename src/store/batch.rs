//! Buffered bulk writes

use std::time::Duration;

use tracing::{debug, warn};

use super::{Item, RecordStore, StoreError};

/// Largest batch a single write may carry (DynamoDB `BatchWriteItem` limit)
pub const MAX_BATCH_SIZE: usize = 25;

/// Consecutive rounds without progress before a flush gives up
const MAX_STALLED_ROUNDS: u32 = 5;

/// Accepts items one at a time and writes them in bounded batches
///
/// Items the store hands back as unprocessed are queued again and resent
/// with the next batch.
pub struct BatchWriter<'a> {
  store: &'a dyn RecordStore,
  pending: Vec<Item>,
  written: usize,
}

impl<'a> BatchWriter<'a> {
  pub fn new(store: &'a dyn RecordStore) -> Self {
    Self {
      store,
      pending: Vec::with_capacity(MAX_BATCH_SIZE),
      written: 0,
    }
  }

  /// Queue one item, flushing once a full batch is buffered
  pub async fn put(&mut self, item: Item) -> Result<(), StoreError> {
    self.pending.push(item);
    if self.pending.len() >= MAX_BATCH_SIZE {
      self.send_batch().await?;
    }
    Ok(())
  }

  /// Write everything still buffered
  pub async fn flush(&mut self) -> Result<(), StoreError> {
    let mut stalled = 0;
    while !self.pending.is_empty() {
      if self.send_batch().await? > 0 {
        stalled = 0;
        continue;
      }

      stalled += 1;
      if stalled >= MAX_STALLED_ROUNDS {
        return Err(StoreError::Stalled(self.pending.len()));
      }
      warn!(
        "Batch write made no progress ({} items pending), retrying",
        self.pending.len()
      );
      tokio::time::sleep(Duration::from_millis(50 * u64::from(stalled))).await;
    }
    Ok(())
  }

  /// Flush and return the number of items written
  pub async fn finish(mut self) -> Result<usize, StoreError> {
    self.flush().await?;
    Ok(self.written)
  }

  /// Send one batch; returns how many of its items the store accepted
  async fn send_batch(&mut self) -> Result<usize, StoreError> {
    let size = self.pending.len().min(MAX_BATCH_SIZE);
    let batch: Vec<Item> = self.pending.drain(..size).collect();

    let unprocessed = self.store.write_batch(batch).await?;
    let accepted = size - unprocessed.len();
    self.written += accepted;
    debug!(
      "Batch of {} written, {} unprocessed",
      size,
      unprocessed.len()
    );

    self.pending.extend(unprocessed);
    Ok(accepted)
  }
}
