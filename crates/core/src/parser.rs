use crate::error::{ErrorBuilder, Result};
use crate::traits::ApiResponse;
use serde_json::Value;

/// Decode a raw JSON response body into `T`.
///
/// The body must be a JSON object holding `T::ROOT_ELEMENT`; anything else
/// is reported as an unparsable response. Missing or mistyped inner fields
/// fall back to defaults.
pub fn parse_response<T: ApiResponse>(body: &str) -> Result<T> {
    let values: Value =
        serde_json::from_str(body).map_err(|e| ErrorBuilder::response().undecodable(e))?;

    match &values {
        Value::Object(map) if map.contains_key(T::ROOT_ELEMENT) => Ok(T::from(&values)),
        _ => Err(ErrorBuilder::response().wrong_root()),
    }
}
