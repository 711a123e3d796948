//! Integration tests library for the bulk WHOIS client
//!
//! This crate contains shared fixtures and helpers for end-to-end tests
//! against a mocked API server.

pub mod common;

// Re-export commonly used types for tests
pub use bulk_whois_client::{Client, ClientConfig};
pub use bulk_whois_core::{Error, Result};
pub use mockito::{Matcher, Server, ServerGuard};
pub use serde_json::{json, Value};
pub use std::time::Duration;
