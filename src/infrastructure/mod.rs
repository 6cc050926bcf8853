//! Infrastructure layer - Transport and remote service implementations

pub mod http;
pub mod logging;
pub mod web_api_key;
