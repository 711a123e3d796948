use crate::error::{ErrorBuilder, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static API_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^at_[a-z0-9]{29}$").expect("API key pattern is valid"));

/// Validated vendor API key (`at_` followed by 29 alphanumeric characters)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(key: &str) -> Result<()> {
        if API_KEY_PATTERN.is_match(key) {
            Ok(())
        } else {
            Err(ErrorBuilder::validation().invalid("Invalid API key format"))
        }
    }
}

// Only the `at_` prefix is ever printed
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}***)", &self.0[..3])
    }
}

impl FromStr for ApiKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_KEY: &str = "at_abcdefghijklmnopqrstuvwxyz123";

    #[test]
    fn test_valid_api_keys() {
        assert_eq!(ApiKey::new(VALID_KEY).unwrap().as_str(), VALID_KEY);
        assert!(ApiKey::new("at_00000000000000000000000000000").is_ok());
        assert!(ApiKey::new("AT_ABCDEFGHIJKLMNOPQRSTUVWXYZ123").is_ok());
        assert!(ApiKey::new("at_AbCdEfGhIjKlMnOpQrStUvWxYz123").is_ok());
    }

    #[test]
    fn test_invalid_api_keys() {
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("at_").is_err());
        assert!(ApiKey::new("at_abcdefghijklmnopqrstuvwxyz12").is_err());
        assert!(ApiKey::new("at_abcdefghijklmnopqrstuvwxyz1234").is_err());
        assert!(ApiKey::new("xx_abcdefghijklmnopqrstuvwxyz123").is_err());
        assert!(ApiKey::new("at_abcdefghijklmnopqrstuvwxyz12-").is_err());
        assert!(ApiKey::new(" at_abcdefghijklmnopqrstuvwxyz123").is_err());

        match ApiKey::new("foo").unwrap_err() {
            crate::Error::Parameter { message } => assert_eq!(message, "Invalid API key format"),
            other => panic!("Expected Parameter error, got: {other:?}"),
        }
    }

    #[test]
    fn test_debug_hides_key() {
        let key = ApiKey::new(VALID_KEY).unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains(VALID_KEY));
        assert_eq!(debug, "ApiKey(at_***)");
    }

    #[test]
    fn test_from_str() {
        let key: ApiKey = VALID_KEY.parse().unwrap();
        assert_eq!(key.as_ref(), VALID_KEY);
    }
}
