//! Relaying upstream responses to the caller.
//!
//! # Responsibilities
//! - Copy upstream status, headers and buffered body onto the outbound response
//! - Leave out framing headers that describe the upstream connection
//!
//! # Design Decisions
//! - The body is fully buffered, so hyper recomputes `content-length`
//! - Repeated upstream headers (e.g. several `set-cookie`) are all kept
//! - CORS headers are layered on afterwards by `cors.rs`

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName};
use axum::response::Response;

use crate::upstream::UpstreamResponse;

/// Headers that belong to the upstream hop and are not relayed.
fn is_framing_header(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "content-length"
            | "keep-alive"
            | "proxy-connection"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Copy every relayable upstream header into `target`.
pub fn copy_upstream_headers(source: &HeaderMap, target: &mut HeaderMap) {
    for (name, value) in source.iter() {
        if !is_framing_header(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

/// Turn a buffered upstream response into the response sent to the caller.
pub fn relay(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;
    copy_upstream_headers(&upstream.headers, response.headers_mut());
    response
}
