pub mod client;
pub mod config;
pub mod requester;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use requester::ApiRequester;
