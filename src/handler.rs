use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::protocol::{LookupRequest, LookupResponse};
use crate::store::RecordStore;

/// Lookup handler: one key-equality query per event
pub struct Handler {
  store: Arc<dyn RecordStore>,
  key_name: String,
}

impl Handler {
  /// Create a handler over a shared store client
  pub fn new(store: Arc<dyn RecordStore>, key_name: impl Into<String>) -> Self {
    Self {
      store,
      key_name: key_name.into(),
    }
  }

  /// Handle one event; failures become 500 responses
  pub async fn handle(&self, event: Value) -> LookupResponse {
    match self.lookup(event).await {
      Ok(response) => response,
      Err(e) => {
        warn!("Lookup failed: {}", e);
        LookupResponse::failure(e.to_string())
      }
    }
  }

  async fn lookup(&self, event: Value) -> Result<LookupResponse, LookupError> {
    let request = LookupRequest::from_event(event)?;
    let value = request.query_param(&self.key_name)?;
    debug!("Looking up {} = {}", self.key_name, value);

    let items = self.store.query(&self.key_name, value).await?;

    // The table key guarantees at most one match
    match items.first() {
      Some(item) => Ok(LookupResponse::found(item)?),
      None => Ok(LookupResponse::not_found()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::{Item, MemoryStore, StoreError};
  use async_trait::async_trait;
  use serde_json::json;

  fn item(value: Value) -> Item {
    match value {
      Value::Object(map) => map,
      _ => unreachable!(),
    }
  }

  fn jdoe() -> Item {
    item(json!({
      "user_id": "abc-123",
      "username": "jdoe",
      "email": "jdoe@example.com",
      "first_name": "John",
      "last_name": "Doe",
      "age": 34,
      "address": {
        "street": "12 Main St",
        "city": "Springfield",
        "state": "Illinois",
        "zip_code": "62701",
        "country": "United States"
      },
      "phone_number": "555-010-2000",
      "registration_date": "2021-06-01T10:20:30.000000"
    }))
  }

  fn handler_with(items: Vec<Item>) -> Handler {
    let store = MemoryStore::new("user_id");
    for item in items {
      store.put(item).unwrap();
    }
    Handler::new(Arc::new(store), "user_id")
  }

  fn event(user_id: &str) -> Value {
    json!({"queryStringParameters": {"user_id": user_id}})
  }

  fn body(response: &LookupResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
  }

  struct UnavailableStore;

  #[async_trait]
  impl RecordStore for UnavailableStore {
    async fn query(&self, _: &str, _: &str) -> Result<Vec<Item>, StoreError> {
      Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn write_batch(&self, _: Vec<Item>) -> Result<Vec<Item>, StoreError> {
      Err(StoreError::Backend("connection refused".to_string()))
    }
  }

  #[tokio::test]
  async fn test_found() {
    let handler = handler_with(vec![jdoe()]);
    let response = handler.handle(event("abc-123")).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(body(&response), Value::Object(jdoe()));
    assert_eq!(body(&response)["username"], "jdoe");
    assert_eq!(response.headers["Content-Type"], "application/json");
  }

  #[tokio::test]
  async fn test_found_body_is_a_record() {
    let handler = handler_with(vec![jdoe()]);
    let response = handler.handle(event("abc-123")).await;

    let record: crate::record::Record = serde_json::from_str(&response.body).unwrap();
    assert_eq!(record.user_id, "abc-123");
    assert_eq!(record.age, 34);
    assert_eq!(record.address.city, "Springfield");
  }

  #[tokio::test]
  async fn test_not_found_on_empty_store() {
    let handler = handler_with(Vec::new());
    let response = handler.handle(event("xyz")).await;

    assert_eq!(response.status_code, 404);
    assert_eq!(body(&response), json!({"message": "User not found"}));
  }

  #[tokio::test]
  async fn test_missing_user_id() {
    let handler = handler_with(vec![jdoe()]);

    for event in [
      json!({"queryStringParameters": {"id": "abc-123"}}),
      json!({"queryStringParameters": null}),
      json!({"httpMethod": "GET"}),
    ] {
      let response = handler.handle(event).await;
      assert_eq!(response.status_code, 500);
      assert_eq!(
        body(&response)["message"],
        "missing query parameter 'user_id'"
      );
    }
  }

  #[tokio::test]
  async fn test_malformed_event() {
    let handler = handler_with(vec![jdoe()]);
    let response = handler.handle(json!("abc-123")).await;

    assert_eq!(response.status_code, 500);
    let message = body(&response)["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("malformed request"));
  }

  #[tokio::test]
  async fn test_empty_user_id() {
    let handler = handler_with(vec![jdoe()]);
    let response = handler.handle(event("")).await;

    assert_eq!(response.status_code, 500);
    assert!(body(&response)["message"].is_string());
  }

  #[tokio::test]
  async fn test_store_failure() {
    let handler = Handler::new(Arc::new(UnavailableStore), "user_id");
    let response = handler.handle(event("abc-123")).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(body(&response), json!({"message": "connection refused"}));
  }

  #[tokio::test]
  async fn test_repeated_lookups_are_identical() {
    let handler = handler_with(vec![jdoe()]);

    let first = handler.handle(event("abc-123")).await;
    let second = handler.handle(event("abc-123")).await;
    assert_eq!(first, second);

    let first = handler.handle(event("missing")).await;
    let second = handler.handle(event("missing")).await;
    assert_eq!(first, second);
  }

  #[tokio::test]
  async fn test_custom_key_name() {
    let store = MemoryStore::new("profile_id");
    store
      .put(item(json!({"profile_id": "p-1", "username": "jdoe"})))
      .unwrap();
    let handler = Handler::new(Arc::new(store), "profile_id");

    let response = handler
      .handle(json!({"queryStringParameters": {"profile_id": "p-1"}}))
      .await;
    assert_eq!(response.status_code, 200);
  }
}
