//! Item envelope encoding/decoding for byte-oriented storage

use crate::store::Item;

/// Item value structure for storage
///
/// Layout: one version byte followed by the item as compact JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
  /// Format version
  pub version: u8,
  /// Stored attributes
  pub item: Item,
}

impl ItemValue {
  /// Wrap an item in the current format version
  pub fn new(item: Item) -> Self {
    Self {
      version: super::CURRENT_VERSION,
      item,
    }
  }

  /// Serialize to bytes
  pub fn serialize(&self) -> Result<Vec<u8>, DecodeError> {
    let mut buf = vec![self.version];
    serde_json::to_writer(&mut buf, &self.item).map_err(|e| DecodeError::Json(e.to_string()))?;
    Ok(buf)
  }

  /// Deserialize from bytes
  pub fn deserialize(bytes: &[u8]) -> Result<Self, DecodeError> {
    let (&version, payload) = bytes.split_first().ok_or(DecodeError::InvalidData)?;
    if version == 0 {
      return Err(DecodeError::InvalidData);
    }

    let item: Item =
      serde_json::from_slice(payload).map_err(|e| DecodeError::Json(e.to_string()))?;
    Ok(Self { version, item })
  }
}

/// Errors that can occur during decoding
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
  /// Input data is invalid or corrupted
  #[error("invalid data for decoding")]
  InvalidData,
  /// Payload is not a JSON object
  #[error("invalid item payload: {0}")]
  Json(String),
  /// Attribute type with no JSON counterpart
  #[error("unsupported attribute type '{0}'")]
  UnsupportedAttribute(&'static str),
  /// Numeric attribute that does not parse as a JSON number
  #[error("invalid number attribute '{0}'")]
  InvalidNumber(String),
}
