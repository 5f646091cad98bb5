use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::Item;

pub const NOT_FOUND_MESSAGE: &str = "User not found";

/// Response returned to the invoking runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
  pub status_code: u16,
  #[serde(default)]
  pub headers: HashMap<String, String>,
  /// Always JSON text
  pub body: String,
}

impl LookupResponse {
  fn new(status_code: u16, body: String) -> Self {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    Self {
      status_code,
      headers,
      body,
    }
  }

  /// 200 carrying the serialized item
  pub fn found(item: &Item) -> Result<Self, serde_json::Error> {
    Ok(Self::new(200, serde_json::to_string(item)?))
  }

  /// 404 with the fixed not-found message
  pub fn not_found() -> Self {
    Self::message(404, NOT_FOUND_MESSAGE)
  }

  /// 500 carrying the error text
  pub fn failure(msg: impl AsRef<str>) -> Self {
    Self::message(500, msg.as_ref())
  }

  fn message(status_code: u16, msg: &str) -> Self {
    Self::new(status_code, json!({ "message": msg }).to_string())
  }
}
