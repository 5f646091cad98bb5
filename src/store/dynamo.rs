use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use tracing::{debug, info};

use super::{Item, RecordStore, StoreError};
use crate::config::StoreConfig;
use crate::encoding::{from_attribute_map, to_attribute_map};

/// DynamoDB-backed record table
pub struct DynamoStore {
  client: Client,
  table_name: String,
}

impl DynamoStore {
  /// Wrap an existing client
  pub fn new(client: Client, table_name: impl Into<String>) -> Self {
    Self {
      client,
      table_name: table_name.into(),
    }
  }

  /// Build a client from the default AWS credential and region chain
  pub async fn connect(config: &StoreConfig, table_name: &str) -> Self {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
      loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.endpoint_url {
      info!("Using DynamoDB endpoint {}", endpoint);
      builder = builder.endpoint_url(endpoint);
    }

    Self::new(Client::from_conf(builder.build()), table_name)
  }
}

fn backend_error<E>(err: E) -> StoreError
where
  E: std::error::Error,
{
  StoreError::Backend(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl RecordStore for DynamoStore {
  async fn query(&self, key_name: &str, value: &str) -> Result<Vec<Item>, StoreError> {
    let output = self
      .client
      .query()
      .table_name(&self.table_name)
      .key_condition_expression("#k = :v")
      .expression_attribute_names("#k", key_name)
      .expression_attribute_values(":v", AttributeValue::S(value.to_string()))
      .send()
      .await
      .map_err(backend_error)?;

    let items = output.items.unwrap_or_default();
    debug!("Query on {} returned {} items", self.table_name, items.len());

    items
      .into_iter()
      .map(|attrs| from_attribute_map(attrs).map_err(StoreError::from))
      .collect()
  }

  async fn write_batch(&self, items: Vec<Item>) -> Result<Vec<Item>, StoreError> {
    let requests = items
      .into_iter()
      .map(|item| {
        let put = PutRequest::builder()
          .set_item(Some(to_attribute_map(item)))
          .build()
          .map_err(backend_error)?;
        Ok(WriteRequest::builder().put_request(put).build())
      })
      .collect::<Result<Vec<_>, StoreError>>()?;

    let output = self
      .client
      .batch_write_item()
      .request_items(&self.table_name, requests)
      .send()
      .await
      .map_err(backend_error)?;

    output
      .unprocessed_items
      .unwrap_or_default()
      .remove(&self.table_name)
      .unwrap_or_default()
      .into_iter()
      .filter_map(|request| request.put_request)
      .map(|put| from_attribute_map(put.item).map_err(StoreError::from))
      .collect()
  }
}
