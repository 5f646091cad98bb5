use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;

/// Inbound lookup event
///
/// Only `queryStringParameters` is read; every other field of the proxy
/// event is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LookupRequest {
  #[serde(rename = "queryStringParameters", default)]
  pub query_string_parameters: Option<HashMap<String, String>>,
}

impl LookupRequest {
  /// Decode a raw event
  pub fn from_event(event: Value) -> Result<Self, LookupError> {
    if !event.is_object() {
      return Err(LookupError::MalformedRequest(format!(
        "expected an object, got {}",
        kind(&event)
      )));
    }
    serde_json::from_value(event).map_err(|e| LookupError::MalformedRequest(e.to_string()))
  }

  /// Look up a query string parameter
  pub fn query_param(&self, name: &str) -> Result<&str, LookupError> {
    self
      .query_string_parameters
      .as_ref()
      .and_then(|params| params.get(name))
      .map(String::as_str)
      .ok_or_else(|| LookupError::MissingParameter(name.to_string()))
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_proxy_event() {
    let event = json!({
      "resource": "/users",
      "httpMethod": "GET",
      "queryStringParameters": {"user_id": "abc-123"},
      "headers": {"Accept": "application/json"},
    });

    let request = LookupRequest::from_event(event).unwrap();
    assert_eq!(request.query_param("user_id").unwrap(), "abc-123");
  }

  #[test]
  fn test_missing_parameter() {
    let request = LookupRequest::from_event(json!({"queryStringParameters": {}})).unwrap();
    assert!(matches!(
      request.query_param("user_id"),
      Err(LookupError::MissingParameter(name)) if name == "user_id"
    ));
  }

  #[test]
  fn test_null_query_string_parameters() {
    // API Gateway sends null when the URL has no query string
    let request = LookupRequest::from_event(json!({"queryStringParameters": null})).unwrap();
    assert!(request.query_string_parameters.is_none());
    assert!(request.query_param("user_id").is_err());

    let request = LookupRequest::from_event(json!({})).unwrap();
    assert!(request.query_param("user_id").is_err());
  }

  #[test]
  fn test_malformed_event() {
    for event in [json!("user_id=abc"), json!(null), json!([1, 2])] {
      assert!(matches!(
        LookupRequest::from_event(event),
        Err(LookupError::MalformedRequest(_))
      ));
    }

    // Non-string parameter values do not fit the proxy event shape
    let event = json!({"queryStringParameters": {"user_id": 42}});
    assert!(matches!(
      LookupRequest::from_event(event),
      Err(LookupError::MalformedRequest(_))
    ));
  }
}
