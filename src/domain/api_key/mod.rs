//! Web API key domain
//!
//! Value types for the key itself, the session-held cache slot, the form
//! submissions sent to the remote key management pages, and the scraper
//! that reads a key back out of the key page.

mod cache;
mod key;
mod request;
mod scrape;

pub use cache::ApiKeyCache;
pub use key::ApiKey;
pub use request::{
    RegistrationRequest, RevocationRequest, AGREE_TO_TERMS, REGISTER_SUBMIT, REVOKE_CONFIRMATION,
};
pub use scrape::{scrape_key_page, ACCESS_DENIED_MARKER};
