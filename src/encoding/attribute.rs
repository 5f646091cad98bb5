//! DynamoDB attribute value conversion

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use super::DecodeError;
use crate::store::Item;

/// Convert an item into a DynamoDB attribute map
pub fn to_attribute_map(item: Item) -> HashMap<String, AttributeValue> {
  item
    .into_iter()
    .map(|(name, value)| (name, to_attribute(value)))
    .collect()
}

/// Convert a DynamoDB attribute map into an item
pub fn from_attribute_map(attrs: HashMap<String, AttributeValue>) -> Result<Item, DecodeError> {
  attrs
    .into_iter()
    .map(|(name, attr)| Ok((name, from_attribute(attr)?)))
    .collect()
}

fn to_attribute(value: Value) -> AttributeValue {
  match value {
    Value::Null => AttributeValue::Null(true),
    Value::Bool(b) => AttributeValue::Bool(b),
    Value::Number(n) => AttributeValue::N(n.to_string()),
    Value::String(s) => AttributeValue::S(s),
    Value::Array(items) => AttributeValue::L(items.into_iter().map(to_attribute).collect()),
    Value::Object(map) => AttributeValue::M(to_attribute_map(map)),
  }
}

fn from_attribute(attr: AttributeValue) -> Result<Value, DecodeError> {
  Ok(match attr {
    AttributeValue::S(s) => Value::String(s),
    AttributeValue::N(n) => Value::Number(parse_number(&n)?),
    AttributeValue::Bool(b) => Value::Bool(b),
    AttributeValue::Null(_) => Value::Null,
    AttributeValue::L(items) => Value::Array(
      items
        .into_iter()
        .map(from_attribute)
        .collect::<Result<_, _>>()?,
    ),
    AttributeValue::M(map) => Value::Object(from_attribute_map(map)?),
    AttributeValue::Ss(set) => Value::Array(set.into_iter().map(Value::String).collect()),
    AttributeValue::Ns(set) => Value::Array(
      set
        .iter()
        .map(|n| parse_number(n).map(Value::Number))
        .collect::<Result<_, _>>()?,
    ),
    AttributeValue::B(_) => return Err(DecodeError::UnsupportedAttribute("B")),
    AttributeValue::Bs(_) => return Err(DecodeError::UnsupportedAttribute("BS")),
    _ => return Err(DecodeError::UnsupportedAttribute("unknown")),
  })
}

/// DynamoDB numbers travel as strings; prefer integer forms so `42` stays `42`.
fn parse_number(raw: &str) -> Result<Number, DecodeError> {
  if let Ok(i) = raw.parse::<i64>() {
    return Ok(Number::from(i));
  }
  if let Ok(u) = raw.parse::<u64>() {
    return Ok(Number::from(u));
  }
  raw
    .parse::<f64>()
    .ok()
    .and_then(Number::from_f64)
    .ok_or_else(|| DecodeError::InvalidNumber(raw.to_string()))
}
