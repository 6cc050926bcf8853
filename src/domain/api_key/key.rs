use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

const REDACT_FULLY_UP_TO: usize = 8;

static API_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-F]+$").unwrap());

/// Web API key issued by the community platform (uppercase hexadecimal)
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiKey(String);

impl ApiKey {
    /// Parse a key, rejecting anything that is not uppercase hex
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::invalid_key("API key cannot be empty"));
        }

        if !API_KEY_PATTERN.is_match(&value) {
            return Err(DomainError::invalid_key(
                "API key must contain only uppercase hexadecimal digits",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form safe for logs. Keys of eight digits or fewer are fully
    /// masked; longer keys show their first four digits.
    pub fn redacted(&self) -> String {
        if self.0.len() <= REDACT_FULLY_UP_TO {
            return "****".to_string();
        }

        format!("{}****", &self.0[..4])
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ApiKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
