use thiserror::Error;

use crate::store::StoreError;

/// Failures of a single lookup
///
/// Every variant is answered with a 500 carrying the display text; the
/// handler does not tell client mistakes from store failures.
#[derive(Debug, Error)]
pub enum LookupError {
  #[error("malformed request: {0}")]
  MalformedRequest(String),
  #[error("missing query parameter '{0}'")]
  MissingParameter(String),
  #[error(transparent)]
  Store(#[from] StoreError),
  #[error("failed to serialize record: {0}")]
  Serialize(#[from] serde_json::Error),
}
