use std::fmt;
use std::sync::RwLock;

use super::SessionTransport;
use crate::domain::api_key::{ApiKey, ApiKeyCache};

/// Caller-owned authenticated session.
///
/// Holds the cookie-bearing transport, the anti-CSRF `sessionid` token sent
/// with every POST, and the slot the last fetched key is cached in. Login
/// and token refresh happen outside this crate; `set_session_id` lets the
/// owner install a refreshed token.
pub struct Session<T: SessionTransport> {
    transport: T,
    session_id: RwLock<String>,
    api_key: ApiKeyCache,
}

impl<T: SessionTransport> Session<T> {
    pub fn new(transport: T, session_id: impl Into<String>) -> Self {
        Self {
            transport,
            session_id: RwLock::new(session_id.into()),
            api_key: ApiKeyCache::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Current anti-CSRF token
    pub fn session_id(&self) -> String {
        match self.session_id.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_session_id(&self, session_id: impl Into<String>) {
        let session_id = session_id.into();
        match self.session_id.write() {
            Ok(mut guard) => *guard = session_id,
            Err(poisoned) => *poisoned.into_inner() = session_id,
        }
    }

    /// Key cached by the last successful fetch, if any
    pub fn api_key(&self) -> Option<ApiKey> {
        self.api_key.get()
    }

    pub fn api_key_cache(&self) -> &ApiKeyCache {
        &self.api_key
    }
}

impl<T: SessionTransport> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("transport", &self.transport)
            .field("session_id", &"<redacted>")
            .field("api_key", &self.api_key.get())
            .finish()
    }
}
