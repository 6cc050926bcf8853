//! Domain layer - Core types, errors and collaborator seams

pub mod api_key;
pub mod error;
pub mod session;

pub use api_key::{
    scrape_key_page, ApiKey, ApiKeyCache, RegistrationRequest, RevocationRequest,
    ACCESS_DENIED_MARKER,
};
pub use error::DomainError;
pub use session::{HttpResponse, Session, SessionTransport};
