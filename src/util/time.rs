//! Time utility functions

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::Rng;

/// Midnight on January 1st of the decade containing `now`
pub fn decade_start(now: DateTime<Utc>) -> DateTime<Utc> {
  let year = now.year() - now.year().rem_euclid(10);
  NaiveDate::from_ymd_opt(year, 1, 1)
    .and_then(|date| date.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
    .unwrap_or(now)
}

/// Uniformly random instant in `[start, end]` at microsecond resolution
pub fn random_between<R: Rng + ?Sized>(
  rng: &mut R,
  start: DateTime<Utc>,
  end: DateTime<Utc>,
) -> DateTime<Utc> {
  let (lo, hi) = (start.timestamp_micros(), end.timestamp_micros());
  let micros = rng.random_range(lo.min(hi)..=hi.max(lo));
  DateTime::from_timestamp_micros(micros).unwrap_or(end)
}

/// ISO-8601 timestamp without offset, e.g. `2021-06-01T10:20:30.000000`
pub fn iso8601(ts: DateTime<Utc>) -> String {
  ts.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
