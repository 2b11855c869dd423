//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. The client builds `HttpRequest`
//! values and parses `HttpResponse` values; a `Transport` performs the single
//! round-trip in between. Callers that want to own the I/O can skip the
//! transport entirely and pair `build_*` with `parse_response` themselves.
//!
//! All fields use owned types so values can be moved across threads or
//! handed to a foreign HTTP stack without lifetime concerns.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP method for a request. The SC2 Arcade API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL without the query string; `query` holds the
/// ordered, not yet encoded, query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub(crate) fn get(path: String, query: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            query,
            headers: Vec::new(),
        }
    }

    /// Value of the first query pair named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Full URL with the percent-encoded query string appended.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one `HttpRequest` and returns whatever the server answered.
///
/// Implementations must return non-2xx responses as `Ok`; status
/// interpretation belongs to the client. `Err` is reserved for requests that
/// never produced a response.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// The agent owns the connection pool; cloning the transport shares it.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    headers: Vec<(String, String)>,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl UreqTransport {
    /// Build an agent from the transport-level parts of `config`.
    ///
    /// Header names are used exactly as given.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the proxy URL cannot be parsed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = ureq::Agent::config_builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout_global(Some(Duration::from_secs(secs)));
        }
        if let Some(proxy) = &config.proxy {
            let proxy = ureq::Proxy::new(proxy).map_err(|e| ApiError::Config(e.to_string()))?;
            builder = builder.proxy(Some(proxy));
        }

        let mut headers: Vec<(String, String)> = config
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if let Some(agent) = &config.user_agent {
            headers.push(("user-agent".to_string(), agent.clone()));
        }

        Ok(Self {
            headers,
            ..Self::from_agent_config(builder)
        })
    }

    /// Build from a caller-prepared ureq configuration, for settings
    /// `ClientConfig` does not cover (TLS, redirects, connect timeouts).
    ///
    /// `http_status_as_error` is always forced off: status codes are mapped
    /// by `parse_response`, not by the agent.
    pub fn from_agent_config(builder: ureq::config::ConfigBuilder<ureq::typestate::AgentScope>) -> Self {
        Self {
            agent: builder.http_status_as_error(false).build().new_agent(),
            headers: Vec::new(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::from_agent_config(ureq::Agent::config_builder())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(request.path.as_str()),
        };
        for (key, value) in self.headers.iter().chain(&request.headers) {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
