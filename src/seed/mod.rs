//! Synthetic user generation for populating a record store

mod names;

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::info;

use crate::record::{Address, Record};
use crate::store::{BatchWriter, RecordStore, StoreError};
use crate::util::time;

/// Number of users written when no count is given
pub const DEFAULT_USER_COUNT: usize = 1000;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 90;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error(transparent)]
  Store(#[from] StoreError),
  #[error("failed to encode user: {0}")]
  Encode(#[from] serde_json::Error),
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
  words.choose(rng).copied().unwrap_or_default()
}

fn digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
  (0..len)
    .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
    .collect()
}

fn username<R: Rng + ?Sized>(rng: &mut R, first: &str, last: &str) -> String {
  let first = first.to_lowercase();
  let last = last.to_lowercase();
  match rng.random_range(0..4) {
    0 => format!("{first}{last}"),
    1 => format!("{first}.{last}"),
    2 => format!("{}{last}{}", &first[..1], rng.random_range(1..100)),
    _ => format!("{last}{}", digits(rng, 2)),
  }
}

fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
  let area = rng.random_range(200..1000);
  let exchange = rng.random_range(200..1000);
  let line = digits(rng, 4);
  match rng.random_range(0..3) {
    0 => format!("({area}){exchange}-{line}"),
    1 => format!("{area}-{exchange}-{line}"),
    _ => format!("+1-{area}-{exchange}-{line}x{}", digits(rng, 3)),
  }
}

/// Generate one synthetic user with a fresh UUIDv4 identifier
pub fn generate_user<R: Rng + ?Sized>(rng: &mut R) -> Record {
  let mut id = [0u8; 16];
  rng.fill(&mut id);

  let first_name = pick(rng, names::FIRST_NAMES);
  let last_name = pick(rng, names::LAST_NAMES);
  let username = username(rng, first_name, last_name);
  let email = format!(
    "{}.{}@{}",
    first_name.to_lowercase(),
    last_name.to_lowercase(),
    pick(rng, names::EMAIL_DOMAINS)
  );

  let address = Address {
    street: format!(
      "{} {} {}",
      rng.random_range(1..10000),
      pick(rng, names::STREET_NAMES),
      pick(rng, names::STREET_SUFFIXES)
    ),
    city: pick(rng, names::CITIES).to_string(),
    state: pick(rng, names::STATES).to_string(),
    zip_code: digits(rng, 5),
    country: pick(rng, names::COUNTRIES).to_string(),
  };

  let now = Utc::now();
  let registered = time::random_between(rng, time::decade_start(now), now);

  Record {
    user_id: uuid::Builder::from_random_bytes(id).into_uuid().to_string(),
    username,
    email,
    first_name: first_name.to_string(),
    last_name: last_name.to_string(),
    age: rng.random_range(MIN_AGE..=MAX_AGE),
    address,
    phone_number: phone_number(rng),
    registration_date: time::iso8601(registered),
  }
}

/// Generate `count` users and write them to `store` in batches
///
/// `on_added` sees every user once it has been queued for writing.
pub async fn populate<R, F>(
  store: &dyn RecordStore,
  rng: &mut R,
  count: usize,
  mut on_added: F,
) -> Result<usize, SeedError>
where
  R: Rng + ?Sized,
  F: FnMut(&Record),
{
  let mut writer = BatchWriter::new(store);
  for _ in 0..count {
    let user = generate_user(rng);
    on_added(&user);
    writer.put(user.into_item()?).await?;
  }

  let written = writer.finish().await?;
  info!("Wrote {} users", written);
  Ok(written)
}
