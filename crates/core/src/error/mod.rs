mod builder;
mod response;

pub use builder::ErrorBuilder;
pub use response::{ResponseError, ACCESS_RESTRICTED_CODE, ACCESS_RESTRICTED_MESSAGE};

use thiserror::Error;

/// Main error type covering every failure of a bulk WHOIS API call
#[derive(Error, Debug)]
pub enum Error {
    /// Base API error with a free-form message
    #[error("Bulk WHOIS API error: {message}")]
    Api { message: String },

    /// Response body carries a vendor error message
    #[error("API response error: {0}")]
    Response(ResponseError),

    /// Server answered 401, 402 or 403
    #[error("API authentication error: {0}")]
    ApiAuth(ResponseError),

    /// Server answered 400, 417 or 422
    #[error("Bad request: {0}")]
    BadRequest(ResponseError),

    /// Any other HTTP status >= 300
    #[error("HTTP request failed with status {status}: {message}")]
    HttpApi { status: u16, message: String },

    #[error("API key is not set")]
    EmptyApiKey,

    #[error("File error: {message}")]
    File {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid parameter: {message}")]
    Parameter { message: String },

    /// A successful response could not be decoded or had the wrong shape
    #[error("Unparsable API response: {message}")]
    UnparsableResponse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Connectivity failure (DNS, refused connection, timeout)
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl Error {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter {
            message: message.into(),
        }
    }

    pub fn file(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::File {
            message: message.into(),
            source,
        }
    }

    pub fn unparsable(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::UnparsableResponse {
            message: message.into(),
            source,
        }
    }

    /// Classify a non-success HTTP status and its body
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401..=403 => Self::ApiAuth(ResponseError::auth(body)),
            400 | 417 | 422 => Self::BadRequest(ResponseError::new(body)),
            _ => Self::HttpApi {
                status,
                message: body,
            },
        }
    }

    /// The parsed vendor error carried by response-level variants
    pub fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Error::Response(e) | Error::ApiAuth(e) | Error::BadRequest(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this error was raised locally, before any network call
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::EmptyApiKey | Error::Parameter { .. } | Error::File { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::EmptyApiKey | Error::Parameter { .. } => ErrorCategory::Validation,
            Error::Api { .. }
            | Error::Response(_)
            | Error::ApiAuth(_)
            | Error::BadRequest(_) => ErrorCategory::Response,
            Error::HttpApi { .. } => ErrorCategory::Http,
            Error::UnparsableResponse { .. } => ErrorCategory::Data,
            Error::File { .. } => ErrorCategory::Io,
            Error::Network(_) => ErrorCategory::Network,
        }
    }
}

/// Error categories for classification and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Response,
    Http,
    Data,
    Io,
    Network,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Response => write!(f, "response"),
            ErrorCategory::Http => write!(f, "http"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Network => write!(f, "network"),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
