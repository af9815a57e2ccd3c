use crate::api::{parse_model, Endpoint};
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{Parsed, Response};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::builder::ClientBuilder;

/// Executes [`Endpoint`]s against one RAG Engine deployment.
///
/// Cheap to clone; clones share the underlying HTTP connection pools.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: HttpTransport,
    pub(crate) raise_on_unexpected_status: bool,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(transport: HttpTransport, raise_on_unexpected_status: bool) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                raise_on_unexpected_status,
            }),
        }
    }

    pub fn base_url(&self) -> &url::Url {
        self.inner.transport.base_url()
    }

    /// Headers added to every request, including auth.
    pub fn headers(&self) -> &reqwest::header::HeaderMap {
        self.inner.transport.headers()
    }

    /// Timeout applied to lazily-built HTTP clients.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.inner.transport.timeout()
    }

    pub fn raise_on_unexpected_status(&self) -> bool {
        self.inner.raise_on_unexpected_status
    }

    /// Run an operation and return the full response.
    ///
    /// Transport failures and undecodable `200`/`422` bodies propagate as
    /// errors. Other status codes raise [`Error::UnexpectedStatus`] or yield
    /// `parsed = None`, depending on `raise_on_unexpected_status`.
    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Output>> {
        let start = Instant::now();
        let raw = self.inner.transport.execute(endpoint).await?;
        self.build_response(endpoint, raw, start)
    }

    /// Blocking counterpart of [`Client::execute`]. Must not be called from
    /// inside an async runtime.
    pub fn execute_blocking<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Output>> {
        let start = Instant::now();
        let raw = self.inner.transport.execute_blocking(endpoint)?;
        self.build_response(endpoint, raw, start)
    }

    /// Like [`Client::execute`] but returns only the parsed body.
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<Parsed<E::Output>>> {
        Ok(self.execute(endpoint).await?.parsed)
    }

    pub fn send_blocking<E: Endpoint>(&self, endpoint: &E) -> Result<Option<Parsed<E::Output>>> {
        Ok(self.execute_blocking(endpoint)?.parsed)
    }

    fn build_response<E: Endpoint>(
        &self,
        endpoint: &E,
        raw: RawResponse,
        start: Instant,
    ) -> Result<Response<E::Output>> {
        let parsed = match raw.status.as_u16() {
            200 => Some(Parsed::Success(endpoint.parse_success(&raw.content)?)),
            422 => Some(Parsed::ValidationError(parse_model(&raw.content)?)),
            status => {
                info!(
                    http_status = status,
                    operation = E::OPERATION,
                    duration_ms = start.elapsed().as_millis(),
                    raise = self.inner.raise_on_unexpected_status,
                    "rag engine returned an undocumented status"
                );
                if self.inner.raise_on_unexpected_status {
                    return Err(Error::UnexpectedStatus {
                        status,
                        content: raw.content,
                    });
                }
                None
            }
        };
        Ok(Response {
            status: raw.status,
            content: raw.content,
            headers: raw.headers,
            parsed,
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.transport.base_url().as_str())
            .field(
                "raise_on_unexpected_status",
                &self.inner.raise_on_unexpected_status,
            )
            .finish()
    }
}
