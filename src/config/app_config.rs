use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::web_api_key::{WebApiEndpoints, DEFAULT_BASE_URL};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub endpoints: EndpointsConfig,
    pub logging: LoggingConfig,
}

/// Location of the key management pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub base_url: String,
    /// Per-page overrides; unset pages use the standard path under `base_url`
    pub key_info_url: Option<String>,
    pub register_url: Option<String>,
    pub revoke_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            key_info_url: None,
            register_url: None,
            revoke_url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl EndpointsConfig {
    pub fn to_endpoints(&self) -> WebApiEndpoints {
        let mut endpoints = WebApiEndpoints::with_base_url(&self.base_url);

        if let Some(url) = &self.key_info_url {
            endpoints.key_info_url = url.clone();
        }
        if let Some(url) = &self.register_url {
            endpoints.register_url = url.clone();
        }
        if let Some(url) = &self.revoke_url {
            endpoints.revoke_url = url.clone();
        }

        endpoints
    }
}

impl From<&EndpointsConfig> for WebApiEndpoints {
    fn from(config: &EndpointsConfig) -> Self {
        config.to_endpoints()
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` variables,
    /// in increasing precedence. A `.env` file is read first if present.
    pub fn load() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
