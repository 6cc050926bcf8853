//! Community Web API key management
//!
//! Registers, fetches and revokes the Web API key of the account an
//! authenticated community session is logged into:
//! - Form submissions carrying the session's anti-CSRF token
//! - Key page scraping with access-denied detection
//! - Classified errors callers can branch on

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{ApiKey, ApiKeyCache, DomainError, HttpResponse, Session, SessionTransport};
pub use infrastructure::http::ReqwestTransport;
pub use infrastructure::web_api_key::{ApiKeyManager, WebApiEndpoints};
