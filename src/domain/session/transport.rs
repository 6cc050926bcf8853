use async_trait::async_trait;

use crate::domain::DomainError;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Authenticated transport held by a session (for mocking).
///
/// Implementations carry the session's auth cookies and follow redirects.
/// Timeouts and cancellation are the implementation's concern.
#[async_trait]
pub trait SessionTransport: Send + Sync + std::fmt::Debug {
    async fn get(&self, url: &str) -> Result<HttpResponse, DomainError>;

    /// POST `fields` as an `application/x-www-form-urlencoded` body
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RecordedMethod {
        Get,
        Post,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub method: RecordedMethod,
        pub url: String,
        pub form: Vec<(String, String)>,
    }

    impl RecordedRequest {
        pub fn form_value(&self, name: &str) -> Option<&str> {
            self.form
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Debug)]
    pub struct MockSessionTransport {
        responses: RwLock<HashMap<String, HttpResponse>>,
        errors: RwLock<HashMap<String, String>>,
        requests: RwLock<Vec<RecordedRequest>>,
    }

    impl MockSessionTransport {
        pub fn new() -> Self {
            Self {
                responses: RwLock::new(HashMap::new()),
                errors: RwLock::new(HashMap::new()),
                requests: RwLock::new(Vec::new()),
            }
        }

        pub fn with_response(self, url: impl Into<String>, response: HttpResponse) -> Self {
            self.responses.write().unwrap().insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(url.into(), error.into());
            self
        }

        pub fn set_response(&self, url: impl Into<String>, response: HttpResponse) {
            self.responses.write().unwrap().insert(url.into(), response);
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().unwrap().clone()
        }

        pub fn last_request(&self) -> Option<RecordedRequest> {
            self.requests.read().unwrap().last().cloned()
        }

        fn respond(&self, request: RecordedRequest) -> Result<HttpResponse, DomainError> {
            let url = request.url.clone();
            self.requests.write().unwrap().push(request);

            if let Some(error) = self.errors.read().unwrap().get(&url) {
                return Err(DomainError::transport(error.clone()));
            }

            self.responses
                .read()
                .unwrap()
                .get(&url)
                .cloned()
                .ok_or_else(|| DomainError::transport(format!("No mock response for {}", url)))
        }
    }

    impl Default for MockSessionTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionTransport for MockSessionTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, DomainError> {
            self.respond(RecordedRequest {
                method: RecordedMethod::Get,
                url: url.to_string(),
                form: Vec::new(),
            })
        }

        async fn post_form(
            &self,
            url: &str,
            fields: &[(&str, &str)],
        ) -> Result<HttpResponse, DomainError> {
            self.respond(RecordedRequest {
                method: RecordedMethod::Post,
                url: url.to_string(),
                form: fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
        }
    }
}
