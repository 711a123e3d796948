use crate::models::response::ErrorMessage;
use serde_json::Value;
use std::fmt;

/// Code substituted when an authentication failure carries no usable vendor code
pub const ACCESS_RESTRICTED_CODE: i64 = 403;

/// Message substituted together with [`ACCESS_RESTRICTED_CODE`]
pub const ACCESS_RESTRICTED_MESSAGE: &str =
    "Access restricted. Check credits balance or enter a correct API key";

/// Raw error response body plus its best-effort parsed form
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseError {
    message: String,
    parsed_message: Option<ErrorMessage>,
}

impl ResponseError {
    /// Wrap a raw response body. A body that is not a JSON object leaves
    /// the parsed message empty.
    pub fn new(body: impl Into<String>) -> Self {
        let message = body.into();
        let parsed_message = serde_json::from_str::<Value>(&message)
            .ok()
            .filter(Value::is_object)
            .map(|value| ErrorMessage::from(&value));

        Self {
            message,
            parsed_message,
        }
    }

    /// Wrap the body of a 401/402/403 response
    pub fn auth(body: impl Into<String>) -> Self {
        let mut error = Self::new(body);

        let has_code = error
            .parsed_message
            .as_ref()
            .is_some_and(|parsed| parsed.code > 0);

        if !has_code {
            error.parsed_message = Some(ErrorMessage {
                code: ACCESS_RESTRICTED_CODE,
                message: ACCESS_RESTRICTED_MESSAGE.to_string(),
            });
        }

        error
    }

    /// Raw response body
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parsed_message(&self) -> Option<&ErrorMessage> {
        self.parsed_message.as_ref()
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parsed_message {
            Some(parsed) if !parsed.message.is_empty() => {
                write!(f, "{} (code {})", parsed.message, parsed.code)
            }
            _ => write!(f, "{}", self.message),
        }
    }
}
