//! User profile record

use serde::{Deserialize, Serialize};

use crate::store::Item;

/// Postal address of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub street: String,
  pub city: String,
  pub state: String,
  pub zip_code: String,
  pub country: String,
}

/// One user profile, keyed by `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  pub user_id: String,
  pub username: String,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  pub age: u32,
  pub address: Address,
  pub phone_number: String,
  /// ISO-8601 timestamp
  pub registration_date: String,
}

impl Record {
  /// Convert into the stored item form
  pub fn into_item(self) -> Result<Item, serde_json::Error> {
    match serde_json::to_value(self)? {
      serde_json::Value::Object(map) => Ok(map),
      other => Err(serde::ser::Error::custom(format!(
        "record serialized to {other}, expected an object"
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_into_item_field_names() {
    let record = Record {
      user_id: "abc-123".into(),
      username: "jdoe".into(),
      email: "jdoe@example.com".into(),
      first_name: "John".into(),
      last_name: "Doe".into(),
      age: 34,
      address: Address {
        street: "12 Main St".into(),
        city: "Springfield".into(),
        state: "Illinois".into(),
        zip_code: "62701".into(),
        country: "United States".into(),
      },
      phone_number: "555-010-2000".into(),
      registration_date: "2021-06-01T10:20:30.000000".into(),
    };

    let item = record.clone().into_item().unwrap();
    assert_eq!(item["user_id"], "abc-123");
    assert_eq!(item["age"], 34);
    assert_eq!(item["address"]["zip_code"], "62701");
    assert_eq!(item.len(), 10);

    let back: Record = serde_json::from_value(serde_json::Value::Object(item)).unwrap();
    assert_eq!(back, record);
  }
}
