//! Extraction of the key from the key management page

use once_cell::sync::Lazy;
use regex::Regex;

use super::ApiKey;
use crate::domain::DomainError;

/// Banner shown instead of the key page when the session is not authorized
pub const ACCESS_DENIED_MARKER: &str = "<h2>Access Denied</h2>";

static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>Key: ([0-9A-F]+)</p>").unwrap());

/// Read the registered key out of the raw key page body.
///
/// The denial banner is checked before the key pattern: a denied page
/// yields `AccessDenied` even if it also contains a key fragment.
pub fn scrape_key_page(body: &str) -> Result<ApiKey, DomainError> {
    if body.contains(ACCESS_DENIED_MARKER) {
        return Err(DomainError::AccessDenied);
    }

    let captured = KEY_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1))
        .ok_or(DomainError::KeyNotFound)?;

    ApiKey::parse(captured.as_str())
}
