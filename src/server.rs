use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::handler::Handler;
use crate::protocol::LookupResponse;
use crate::store::{self, RecordStore, StoreError};

/// Lookup service bound to one record store client
pub struct Server {
  handler: Handler,
  config: Config,
}

impl Server {
  /// Open the configured store and build the handler
  ///
  /// The store client is created once here and shared by every invocation.
  pub async fn start(config: Config) -> Result<Arc<Self>, StoreError> {
    let store = store::open(&config).await?;
    Ok(Arc::new(Self::with_store(config, store)))
  }

  /// Build a server over an existing store
  pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Self {
    let handler = Handler::new(store, config.key_name.clone());
    Self { handler, config }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Handle a single event
  pub async fn invoke(&self, event: Value) -> LookupResponse {
    self.handler.handle(event).await
  }

  /// Serve events from the Lambda runtime until it shuts down
  pub async fn run(self: Arc<Self>) -> Result<(), Error> {
    info!(
      "Serving lookups on table {} by {}",
      self.config.table_name, self.config.key_name
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
      let server = Arc::clone(&self);
      async move {
        info!("Invocation {}", event.context.request_id);
        Ok::<LookupResponse, Error>(server.invoke(event.payload).await)
      }
    }))
    .await
  }
}
