use crate::api::{Endpoint, PathSegment, QueryParams};
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use url::Url;

/// Status, headers and body of one exchange, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content: Bytes,
}

/// Per-request pieces derived from an [`Endpoint`].
struct Prepared {
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
}

/// Sends requests through injected or lazily-built reqwest clients.
///
/// Every request asks for `application/json` and bodies are sent as
/// `application/json`; configured headers of the same name replace these
/// defaults.
///
/// Connection pooling, timeouts and TLS are configuration of those clients;
/// nothing here retries or times out on its own.
pub struct HttpTransport {
    base_url: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    async_client: OnceCell<reqwest::Client>,
    blocking_client: OnceCell<reqwest::blocking::Client>,
}

impl HttpTransport {
    pub fn new(base_url: Url, headers: HeaderMap, timeout: Option<Duration>) -> Self {
        Self {
            base_url,
            headers,
            timeout,
            async_client: OnceCell::new(),
            blocking_client: OnceCell::new(),
        }
    }

    pub fn with_async_client(self, client: reqwest::Client) -> Self {
        let _ = self.async_client.set(client);
        self
    }

    pub fn with_blocking_client(self, client: reqwest::blocking::Client) -> Self {
        let _ = self.blocking_client.set(client);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn async_client(&self) -> Result<&reqwest::Client> {
        self.async_client.get_or_try_init(|| {
            let mut builder = reqwest::Client::builder();
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("http_transport"),
                )
            })
        })
    }

    // Built on first blocking call so that async-only users never create a
    // blocking runtime.
    fn blocking_client(&self) -> Result<&reqwest::blocking::Client> {
        self.blocking_client.get_or_try_init(|| {
            let mut builder = reqwest::blocking::Client::builder();
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create blocking HTTP client: {}", e),
                    ErrorContext::new().with_source("http_transport"),
                )
            })
        })
    }

    /// JSON defaults first, then the configured headers, which replace any
    /// default of the same name.
    fn request_headers(&self, has_body: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    fn prepare<E: Endpoint>(&self, endpoint: &E) -> Result<Prepared> {
        let url = build_url(&self.base_url, &endpoint.path(), &endpoint.query())?;
        let body = match endpoint.body()? {
            Some(value) => Some(serde_json::to_vec(&value)?),
            None => None,
        };
        tracing::debug!(
            operation = E::OPERATION,
            method = %endpoint.method(),
            url = %url,
            has_body = body.is_some(),
            "dispatching rag engine request"
        );
        Ok(Prepared {
            method: endpoint.method(),
            url,
            body,
        })
    }

    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Result<RawResponse> {
        let prepared = self.prepare(endpoint)?;
        let headers = self.request_headers(prepared.body.is_some());
        let mut request = self
            .async_client()?
            .request(prepared.method, prepared.url)
            .headers(headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes().await?;
        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }

    pub fn execute_blocking<E: Endpoint>(&self, endpoint: &E) -> Result<RawResponse> {
        let prepared = self.prepare(endpoint)?;
        let headers = self.request_headers(prepared.body.is_some());
        let mut request = self
            .blocking_client()?
            .request(prepared.method, prepared.url)
            .headers(headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }
        let response = request.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes()?;
        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }
}

/// Join path segments onto the base URL and append the query string.
///
/// Parameters are pushed as whole segments, so `/`, `?` and `#` inside them
/// are percent-encoded rather than changing the route.
pub fn build_url(base: &Url, path: &[PathSegment<'_>], query: &QueryParams) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            Error::configuration_with_context(
                "base URL cannot carry a path",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base.to_string()),
            )
        })?;
        segments.pop_if_empty();
        for segment in path {
            match segment {
                PathSegment::Literal(s) => segments.push(s),
                PathSegment::Param(s) => segments.push(s),
            };
        }
    }
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(query.pairs().iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}
