//! Parameter validation for bulk WHOIS API calls
//!
//! Every validator is total over its input type and fails with
//! [`Error::Parameter`](crate::Error::Parameter) carrying a specific message.
//! The `*_value` variants accept loosely-typed JSON input, where a wrong
//! type is one more way for a parameter to be invalid.

use crate::error::{ErrorBuilder, Result};
use crate::types::{ApiKey, OutputFormat, RequestId, SearchType};
use serde_json::Value;

/// Validate an API key, returning it unchanged
pub fn validate_api_key(api_key: &str) -> Result<String> {
    ApiKey::new(api_key).map(|key| key.as_str().to_string())
}

/// Validate a list of domain names. `None` stands for an explicit null.
pub fn validate_domains<S: AsRef<str>>(domains: Option<&[S]>) -> Result<Vec<String>> {
    let domains =
        domains.ok_or_else(|| ErrorBuilder::validation().invalid("Domain name list cannot be None"))?;

    if domains.is_empty() {
        return Err(ErrorBuilder::validation().invalid("Domain name list cannot be empty"));
    }

    Ok(domains.iter().map(|d| d.as_ref().to_string()).collect())
}

pub fn validate_domains_value(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => validate_domains::<String>(None),
        Value::Array(items) => {
            let domains = items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ErrorBuilder::validation().invalid("Incorrect domain name value")
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            validate_domains(Some(domains.as_slice()))
        }
        _ => Err(ErrorBuilder::validation().invalid("Expected a list of domain names")),
    }
}

/// Maximum number of records to return, at least 1
pub fn validate_max_records(value: i64) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ErrorBuilder::validation().invalid("Max records value must be greater than 0"))
    }
}

pub fn validate_max_records_value(value: &Value) -> Result<i64> {
    strict_integer(value)
        .ok_or_else(|| ErrorBuilder::validation().invalid("Max records value must be greater than 0"))
        .and_then(validate_max_records)
}

/// First record to return, at least 1
pub fn validate_start_index(value: i64) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ErrorBuilder::validation().invalid("Start index must be greater than or equal to 1"))
    }
}

pub fn validate_start_index_value(value: &Value) -> Result<i64> {
    strict_integer(value)
        .ok_or_else(|| {
            ErrorBuilder::validation().invalid("Start index must be greater than or equal to 1")
        })
        .and_then(validate_start_index)
}

pub fn validate_output_format(value: &str) -> Result<OutputFormat> {
    value.parse()
}

pub fn validate_output_format_value(value: &Value) -> Result<OutputFormat> {
    match value.as_str() {
        Some(s) => validate_output_format(s),
        None => Err(ErrorBuilder::validation().invalid("Response format must be json or xml")),
    }
}

pub fn validate_request_id(value: &str) -> Result<RequestId> {
    RequestId::new(value)
}

pub fn validate_request_id_value(value: &Value) -> Result<RequestId> {
    match value.as_str() {
        Some(s) => validate_request_id(s),
        None => Err(ErrorBuilder::validation().invalid("Invalid request ID format")),
    }
}

pub fn validate_search_type(value: &str) -> Result<SearchType> {
    value.parse()
}

pub fn validate_search_type_value(value: &Value) -> Result<SearchType> {
    match value.as_str() {
        Some(s) => validate_search_type(s),
        None => Err(ErrorBuilder::validation().invalid("Search type must be all or noerror")),
    }
}

// Only JSON integers count; floats, strings and booleans do not
fn strict_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}
