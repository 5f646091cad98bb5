use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use user_lookup::config::Config;
use user_lookup::server::Server;
use user_lookup::util;

/// User lookup service
#[derive(Parser, Debug)]
#[command(name = "user-lookup", version)]
struct Cli {
  /// Path to the TOML configuration file
  #[arg(long, short, env = "USER_LOOKUP_CONFIG", global = true)]
  config: Option<PathBuf>,

  /// Record table name, overrides the configuration file
  #[arg(long, env = "TABLE_NAME", global = true)]
  table_name: Option<String>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Serve lookups under the Lambda runtime (default)
  Serve,
  /// Handle one event and print the response
  Invoke {
    /// Event JSON file, stdin when omitted
    #[arg(long)]
    event: Option<PathBuf>,
  },
}

fn read_event(path: Option<&PathBuf>) -> Result<serde_json::Value> {
  let raw = match path {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read event file '{}'", path.display()))?,
    None => {
      let mut raw = String::new();
      std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read event from stdin")?;
      raw
    }
  };
  serde_json::from_str(&raw).context("Event is not valid JSON")
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let mut config = Config::load(cli.config.as_deref())?;
  if let Some(table_name) = cli.table_name {
    config.table_name = table_name;
  }
  config.validate()?;

  util::log::init(&config.log).context("Failed to initialize logging")?;

  info!("Starting user-lookup");
  info!("Version: {}", env!("CARGO_PKG_VERSION"));

  let server = Server::start(config)
    .await
    .context("Failed to open record store")?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => server
      .run()
      .await
      .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {e}"))?,
    Command::Invoke { event } => {
      let event = read_event(event.as_ref())?;
      let response = server.invoke(event).await;
      println!("{}", serde_json::to_string_pretty(&response)?);
    }
  }

  Ok(())
}
