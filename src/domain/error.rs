use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Unable to register API key: remote returned status {status}")]
    CannotRegister { status: u16 },

    #[error("Unable to revoke API key: remote returned status {status}")]
    CannotRevoke { status: u16 },

    #[error("Access is denied")]
    AccessDenied,

    #[error("Key not found")]
    KeyNotFound,

    #[error("Invalid API key: {message}")]
    InvalidKey { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn cannot_register(status: u16) -> Self {
        Self::CannotRegister { status }
    }

    pub fn cannot_revoke(status: u16) -> Self {
        Self::CannotRevoke { status }
    }

    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}
