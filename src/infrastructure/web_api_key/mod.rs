//! Web API key management against the community platform

mod endpoints;
mod service;

pub use endpoints::{WebApiEndpoints, DEFAULT_BASE_URL};
pub use service::ApiKeyManager;
