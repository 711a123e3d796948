use anyhow::{Context, Result};
use bulk_whois_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const ENV_API_KEY: &str = "BULK_WHOIS_API_KEY";
pub const ENV_BASE_URL: &str = "BULK_WHOIS_BASE_URL";
pub const ENV_TIMEOUT: &str = "BULK_WHOIS_TIMEOUT";
pub const ENV_LOG_LEVEL: &str = "BULK_WHOIS_LOG_LEVEL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub client: ClientConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the optional TOML file, then `BULK_WHOIS_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env(|name| env::var(name).ok())?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.client.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.client.timeout_secs = timeout
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT} must be a number of seconds"))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.client.validate()?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow::anyhow!("Invalid log level: {}", self.logging.level)),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.client, ClientConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(lookup(&[
                (ENV_API_KEY, "at_abcdefghijklmnopqrstuvwxyz123"),
                (ENV_BASE_URL, "http://localhost:8080"),
                (ENV_TIMEOUT, "7.5"),
                (ENV_LOG_LEVEL, "debug"),
            ]))
            .unwrap();

        assert_eq!(config.api_key, "at_abcdefghijklmnopqrstuvwxyz123");
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.client.timeout_secs, 7.5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_rejects_bad_timeout() {
        let mut config = Config::default();
        assert!(config.apply_env(lookup(&[(ENV_TIMEOUT, "soon")])).is_err());
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bulk-whois.toml");
        std::fs::write(
            &path,
            r#"
api_key = "at_00000000000000000000000000000"

[client]
timeout_secs = 10

[logging]
level = "info"
"#,
        )
        .unwrap();

        let mut config = Config::from_file(&path).unwrap();
        assert_eq!(config.client.timeout_secs, 10.0);
        assert_eq!(config.client.base_url, ClientConfig::default().base_url);

        config.apply_env(lookup(&[(ENV_TIMEOUT, "3")])).unwrap();
        assert_eq!(config.client.timeout_secs, 3.0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.api_key, "at_00000000000000000000000000000");
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.client.timeout_secs = 0.0;
        assert!(config.validate().is_err());
    }
}
