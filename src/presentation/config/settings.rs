use serde::Deserialize;

use crate::application::services::ranking;
use crate::infrastructure::dictionary::GramotaClient;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub dictionary: DictionarySettings,
    pub recovery: RecoverySettings,
    pub ocr: OcrSettings,
    pub usage: UsageSettings,
}

impl Settings {
    /// Optional per-environment config file overlaid with `PROPUSK_`-prefixed
    /// environment variables; every field has a default, so running with no
    /// configuration at all is fine.
    pub fn load() -> Result<Self, config::ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{environment}")).required(false))
            .add_source(config::Environment::with_prefix("PROPUSK").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            base_url: GramotaClient::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecoverySettings {
    pub default_limit: usize,
}

impl Default for RecoverySettings {
    fn default() -> Self {
        Self {
            default_limit: ranking::DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    pub command: String,
    pub language: String,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            language: "rus".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UsageSettings {
    pub path: String,
}

impl Default for UsageSettings {
    fn default() -> Self {
        Self {
            path: "usage.json".to_string(),
        }
    }
}
