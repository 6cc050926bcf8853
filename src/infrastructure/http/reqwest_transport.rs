use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;

use crate::domain::{DomainError, HttpResponse, SessionTransport};

/// Session transport backed by reqwest.
///
/// Cookies set by the remote are kept in a jar and replayed on later
/// requests. Login code can hand over its own jar with `with_cookie_jar`,
/// or a fully configured client with `with_client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    cookie_jar: Option<Arc<Jar>>,
}

impl ReqwestTransport {
    /// Transport with a fresh, empty cookie jar
    pub fn new() -> Result<Self, DomainError> {
        Self::build(Arc::new(Jar::default()), None)
    }

    pub fn with_cookie_jar(cookie_jar: Arc<Jar>) -> Result<Self, DomainError> {
        Self::build(cookie_jar, None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        Self::build(Arc::new(Jar::default()), Some(timeout))
    }

    /// Use a caller-built client as is; cookie handling is up to its builder
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            cookie_jar: None,
        }
    }

    pub fn cookie_jar(&self) -> Option<&Arc<Jar>> {
        self.cookie_jar.as_ref()
    }

    fn build(cookie_jar: Arc<Jar>, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder().cookie_provider(Arc::clone(&cookie_jar));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| DomainError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cookie_jar: Some(cookie_jar),
        })
    }

    async fn read_response(response: reqwest::Response) -> Result<HttpResponse, DomainError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse::new(status, body))
    }
}

#[async_trait]
impl SessionTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        Self::read_response(response).await
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, DomainError> {
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        Self::read_response(response).await
    }
}
