//! Register, fetch and revoke the account's Web API key through a session

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::WebApiEndpoints;
use crate::domain::{
    scrape_key_page, ApiKey, DomainError, RegistrationRequest, RevocationRequest, Session,
    SessionTransport,
};

/// Manages the Web API key of the account a session is logged into.
///
/// Each operation is one request/response exchange with no retry. The only
/// session state written is the cached key, and only by a successful fetch.
#[derive(Debug)]
pub struct ApiKeyManager<T: SessionTransport> {
    session: Arc<Session<T>>,
    endpoints: WebApiEndpoints,
}

impl<T: SessionTransport> ApiKeyManager<T> {
    pub fn new(session: Arc<Session<T>>) -> Self {
        Self {
            session,
            endpoints: WebApiEndpoints::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: WebApiEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn session(&self) -> &Arc<Session<T>> {
        &self.session
    }

    pub fn endpoints(&self) -> &WebApiEndpoints {
        &self.endpoints
    }

    /// Register a new key scoped to `domain`.
    ///
    /// Success is decided by the status code alone. The new key is not
    /// cached; call `fetch_key` to read it.
    pub async fn register_key(&self, domain: &str) -> Result<(), DomainError> {
        let request = RegistrationRequest::new(domain, self.session.session_id());

        debug!(url = %self.endpoints.register_url, domain, "Registering Web API key");

        let response = self
            .session
            .transport()
            .post_form(&self.endpoints.register_url, &request.form_fields())
            .await?;

        if !response.is_ok() {
            warn!(status = response.status, domain, "Web API key registration rejected");
            return Err(DomainError::cannot_register(response.status));
        }

        info!(domain, "Web API key registered");
        Ok(())
    }

    /// Read the current key from the key page and cache it on the session.
    ///
    /// The response status is not checked: whatever page comes back is
    /// scanned for the denial banner, then for the key fragment.
    pub async fn fetch_key(&self) -> Result<ApiKey, DomainError> {
        debug!(url = %self.endpoints.key_info_url, "Fetching Web API key");

        let response = self
            .session
            .transport()
            .get(&self.endpoints.key_info_url)
            .await?;

        let key = match scrape_key_page(&response.body) {
            Ok(key) => key,
            Err(DomainError::AccessDenied) => {
                warn!(status = response.status, "Access denied to Web API key page");
                return Err(DomainError::AccessDenied);
            }
            Err(e) => {
                debug!(status = response.status, error = %e, "No Web API key on key page");
                return Err(e);
            }
        };

        self.session.api_key_cache().set(key.clone());

        info!(key = %key.redacted(), "Web API key fetched");
        Ok(key)
    }

    /// Revoke the account's current key. The session's cached key is left
    /// as is.
    pub async fn revoke_key(&self) -> Result<(), DomainError> {
        let request = RevocationRequest::new(self.session.session_id());

        debug!(url = %self.endpoints.revoke_url, "Revoking Web API key");

        let response = self
            .session
            .transport()
            .post_form(&self.endpoints.revoke_url, &request.form_fields())
            .await?;

        if !response.is_ok() {
            warn!(status = response.status, "Web API key revocation rejected");
            return Err(DomainError::cannot_revoke(response.status));
        }

        info!("Web API key revoked");
        Ok(())
    }
}
