use crate::error::{ErrorBuilder, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of a UUID in hyphenated form
const CANONICAL_LENGTH: usize = 36;

/// Identifier of a bulk request, a UUID in canonical hyphenated form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<()> {
        if id.len() == CANONICAL_LENGTH && Uuid::try_parse(id).is_ok() {
            Ok(())
        } else {
            Err(ErrorBuilder::validation().invalid("Invalid request ID format"))
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<RequestId> for String {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_ids() {
        let id = RequestId::new("12345678-1234-1234-1234-123456789012").unwrap();
        assert_eq!(id.as_str(), "12345678-1234-1234-1234-123456789012");
        assert!(RequestId::new("ABCDEF01-2345-6789-ABCD-EF0123456789").is_ok());
    }

    #[test]
    fn test_invalid_request_ids() {
        assert!(RequestId::new("").is_err());
        assert!(RequestId::new("123").is_err());
        assert!(RequestId::new("12345678123412341234123456789012").is_err());
        assert!(RequestId::new("{12345678-1234-1234-1234-123456789012}").is_err());
        assert!(RequestId::new("12345678-1234-1234-1234-12345678901g").is_err());

        match RequestId::new("123").unwrap_err() {
            crate::Error::Parameter { message } => {
                assert_eq!(message, "Invalid request ID format")
            }
            other => panic!("Expected Parameter error, got: {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let id: RequestId = "12345678-1234-1234-1234-123456789012".parse().unwrap();
        assert_eq!(id.to_string(), "12345678-1234-1234-1234-123456789012");
    }
}
