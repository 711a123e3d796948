use crate::models::request::Payload;
use crate::types::ApiKey;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

/// Trait for every request sent to the bulk WHOIS API
pub trait ApiRequest: Debug + Send + Sync {
    /// Endpoint path relative to the base URL
    const PATH: &'static str;

    /// Build the wire payload for this request
    fn payload(&self, api_key: &ApiKey) -> Payload;
}

/// Trait for parsed API responses
pub trait ApiResponse: Debug + Send + Sync + Serialize + for<'a> From<&'a Value> {
    /// Top-level key whose presence marks a well-formed response
    const ROOT_ELEMENT: &'static str;
}
