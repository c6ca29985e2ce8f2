//! Upstream tile server access.
//!
//! # Data Flow
//! ```text
//! inbound path + query
//!     → target_url (base + path_and_query, verbatim)
//!     → UpstreamClient::fetch (pooled GET, fixed User-Agent, bounded timeout)
//!     → UpstreamResponse (status, headers, fully buffered body)
//! ```
//!
//! # Design Decisions
//! - One process-wide connection pool; every fetch checks a connection out
//!   and the client returns or closes it on every exit path
//! - Inbound method, headers and body are never forwarded
//! - No retries: a failed fetch is reported once to the caller

pub mod client;

pub use client::{target_url, UpstreamClient, UpstreamResponse};
