//! Single-key user lookup service
//!
//! A Lambda handler that fetches one user profile by `user_id` from a record
//! store, plus the generator used to seed that store with synthetic users.

pub mod config;
pub mod encoding;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod record;
pub mod seed;
pub mod server;
pub mod store;
pub mod util;
