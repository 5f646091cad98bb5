use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use user_lookup::config::Config;
use user_lookup::seed::{self, DEFAULT_USER_COUNT};
use user_lookup::{store, util};

/// Populate the record table with synthetic users
#[derive(Parser, Debug)]
#[command(name = "seed-users", version)]
struct Args {
  /// Path to the TOML configuration file
  #[arg(long, short, env = "USER_LOOKUP_CONFIG")]
  config: Option<PathBuf>,

  /// Record table name, overrides the configuration file
  #[arg(long, env = "TABLE_NAME")]
  table_name: Option<String>,

  /// Number of users to generate
  #[arg(long, short = 'n', default_value_t = DEFAULT_USER_COUNT)]
  count: usize,

  /// RNG seed for reproducible data
  #[arg(long)]
  seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let mut config = Config::load(args.config.as_deref())?;
  if let Some(table_name) = args.table_name {
    config.table_name = table_name;
  }
  config.validate()?;

  util::log::init(&config.log).context("Failed to initialize logging")?;

  let store = store::open(&config)
    .await
    .context("Failed to open record store")?;
  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };

  println!("Starting to populate table {}...", config.table_name);
  seed::populate(store.as_ref(), &mut rng, args.count, |user| {
    println!("Added user: {}", user.username)
  })
  .await
  .context("Failed to populate table")?;
  println!("Finished populating table {}.", config.table_name);

  Ok(())
}
