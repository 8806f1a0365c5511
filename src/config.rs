use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(5);

/// What the registry does when a second strategy arrives for a method.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPolicy {
    /// The latest registration wins.
    #[default]
    Overwrite,
    /// A duplicate registration is rejected.
    Strict,
}

/// Runtime configuration of the dispatch layer.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct DispatchConfig {
    /// Deadline applied to every backend call.
    #[serde(rename = "backend_timeout_ms", with = "millis")]
    pub backend_timeout: Duration,
    pub registration: RegistrationPolicy,
    /// Textual status the simulated wallet provider answers with.
    pub wallet_status: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            backend_timeout: DEFAULT_BACKEND_TIMEOUT,
            registration: RegistrationPolicy::default(),
            wallet_status: "SUCCESS".to_string(),
        }
    }
}

impl DispatchConfig {
    /// Loads configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| PaymentError::ConfigError(format!("invalid config: {}", e)))?;
        if config.backend_timeout.is_zero() {
            return Err(PaymentError::ConfigError(
                "backend_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}
