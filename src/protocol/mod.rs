//! Lookup event protocol
//!
//! This module provides the inbound event shape (an API Gateway proxy
//! request) and the outbound response handed back to the invoking runtime.

pub mod request;
pub mod response;

pub use request::LookupRequest;
pub use response::LookupResponse;
