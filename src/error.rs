//! Errors raised while talking to the upstream tile server.
//!
//! Upstream statuses (including 4xx/5xx) are never errors here; only
//! transport-level failures are. Each one ends as a single failed response
//! to the affected caller.

use std::time::Duration;

use axum::http::header::InvalidHeaderValue;
use axum::http::uri::InvalidUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hyper_util::client::legacy;
use thiserror::Error;

/// Body sent to the caller when the upstream could not be fetched.
pub const PROXY_ERROR_BODY: &str = "Proxy error";

/// Failure while forwarding a request upstream.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The upstream did not answer within the configured deadline.
    #[error("upstream timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, refused connection, connect timeout, or TLS handshake failure.
    #[error("upstream connection failed: {0}")]
    Connect(#[source] legacy::Error),

    /// Any other protocol-level failure while sending or reading the head.
    #[error("upstream request failed: {0}")]
    Request(#[source] legacy::Error),

    /// The connection broke while reading the upstream body.
    #[error("failed to read upstream body: {0}")]
    Body(#[source] axum::Error),

    /// The target URL is not a valid request URI.
    #[error("invalid upstream target `{url}`: {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: InvalidUri,
    },

    /// The TLS backend could not be initialized at startup.
    #[error("failed to initialize TLS: {0}")]
    Tls(#[source] native_tls::Error),

    /// The configured user agent is not a valid header value.
    #[error("invalid upstream user agent: {0}")]
    UserAgent(#[source] InvalidHeaderValue),
}

impl ProxyError {
    /// Classify a failure from sending the request or reading its head.
    pub fn from_send(err: legacy::Error) -> Self {
        if err.is_connect() {
            ProxyError::Connect(err)
        } else {
            ProxyError::Request(err)
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::Timeout(_) => "timeout",
            ProxyError::Connect(_) => "connect",
            ProxyError::Request(_) => "request",
            ProxyError::Body(_) => "body",
            ProxyError::InvalidTarget { .. } => "invalid_target",
            ProxyError::Tls(_) => "tls",
            ProxyError::UserAgent(_) => "user_agent",
        }
    }

    /// Status returned to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Tls(_) | ProxyError::UserAgent(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), PROXY_ERROR_BODY).into_response()
    }
}
