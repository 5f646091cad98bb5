//! Item encoding/decoding for storage
//!
//! This module converts items between their JSON-object form and the
//! representations used by the storage backends: a versioned byte envelope
//! for RocksDB and attribute maps for DynamoDB.

pub mod attribute;
pub mod item;

/// Current format version for encoded items
pub const CURRENT_VERSION: u8 = 1;

pub use attribute::{from_attribute_map, to_attribute_map};
pub use item::{DecodeError, ItemValue};
