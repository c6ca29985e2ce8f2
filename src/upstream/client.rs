//! Pooled HTTP client for the upstream tile server.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::config::UpstreamConfig;
use crate::error::ProxyError;

/// Build the upstream URL for an inbound request.
///
/// The path and query are appended exactly as received, with no
/// normalization or re-encoding.
pub fn target_url(base_url: &str, path_and_query: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + path_and_query.len());
    url.push_str(base_url);
    url.push_str(path_and_query);
    url
}

/// Everything read back from the upstream for one request.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Shared handle to the upstream connection pool.
///
/// Cloning is cheap; all clones use the same pool. Target URIs are handed
/// to the client as `http::Uri`, which keeps the path byte-for-byte.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client<HttpsConnector<HttpConnector>, Body>,
    base_url: Arc<str>,
    user_agent: HeaderValue,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build the client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(ProxyError::UserAgent)?;

        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_connect_timeout(Some(Duration::from_secs(config.connect_timeout_secs)));

        let tls = native_tls::TlsConnector::new().map_err(ProxyError::Tls)?;
        let connector = HttpsConnector::from((http, tls.into()));

        let client = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build(connector);

        Ok(Self {
            client,
            base_url: Arc::from(config.base_url.as_str()),
            user_agent,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Base URL requests are forwarded to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path_and_query` from the upstream and buffer the whole response.
    ///
    /// The deadline covers connecting, the response head and the body.
    pub async fn fetch(&self, path_and_query: &str) -> Result<UpstreamResponse, ProxyError> {
        let url = target_url(&self.base_url, path_and_query);
        let uri = Uri::try_from(url.as_str()).map_err(|source| ProxyError::InvalidTarget {
            url: url.clone(),
            source,
        })?;

        let fetch = async {
            let mut request = Request::new(Body::empty());
            *request.uri_mut() = uri;
            request
                .headers_mut()
                .insert(header::USER_AGENT, self.user_agent.clone());

            let response = self
                .client
                .request(request)
                .await
                .map_err(ProxyError::from_send)?;

            let (parts, body) = response.into_parts();
            let body = to_bytes(Body::new(body), usize::MAX)
                .await
                .map_err(ProxyError::Body)?;

            Ok::<_, ProxyError>(UpstreamResponse {
                status: parts.status,
                headers: parts.headers,
                body,
            })
        };

        let response = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| ProxyError::Timeout(self.timeout))??;

        tracing::trace!(
            url = %url,
            status = %response.status,
            body_len = response.body.len(),
            "Upstream response buffered"
        );

        Ok(response)
    }
}
