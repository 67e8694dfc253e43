//! Network fetcher: one GET, status check, JSON decode.
//!
//! # Design
//! `Fetcher` is the seam between the repository and the network. The
//! production `HttpFetcher` drives a blocking `ureq` agent on tokio's
//! blocking pool so callers get an ordinary future, then hands the raw
//! `HttpResponse` to `decode_response`. The agent is configured not to treat
//! 4xx/5xx as transport errors; status interpretation belongs to the core.
//!
//! Failure classification:
//! - transport failure (DNS, refused, TLS, reset, body read): `Network`
//! - the blocking task panicked or was cancelled, so no response exists: `Unknown`
//! - everything else: see `decode_response`

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::client::decode_response;
use crate::error::CountryError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs a single GET and decodes the body as `T`.
pub trait Fetcher: Send + Sync {
    fn fetch<T>(&self, url: &Url) -> impl Future<Output = Result<T, CountryError>> + Send
    where
        T: DeserializeOwned + Send;
}

/// `Fetcher` backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Transport defaults: no timeout override, redirects as ureq follows them.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent (proxy, TLS roots, timeouts). It must
    /// have `http_status_as_error(false)` or non-2xx responses will surface
    /// as `Network` instead of `Server`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }

    /// Execute a request on the blocking pool and return the raw response.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, CountryError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, &request))
            .await
            .map_err(|err| {
                warn!(error = %err, "transport task ended without a response");
                CountryError::Unknown
            })?
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch<T>(&self, url: &Url) -> Result<T, CountryError>
    where
        T: DeserializeOwned + Send,
    {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        };
        let response = self.execute(request).await?;
        debug!(%url, status = response.status, bytes = response.body.len(), "received response");
        decode_response(response).inspect_err(|err| {
            warn!(%url, kind = ?err.kind(), error = %err, "fetch failed");
        })
    }
}

fn execute_blocking(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse, CountryError> {
    debug!(method = request.method.as_str(), url = %request.url, "sending request");
    let mut builder = match request.method {
        HttpMethod::Get => agent.get(request.url.as_str()),
    };
    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    let mut response = builder.call().map_err(|err| {
        warn!(url = %request.url, error = %err, "transport error");
        CountryError::network(err)
    })?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(CountryError::network)?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
