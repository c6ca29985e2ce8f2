//! CORS-enabling reverse proxy for the Soundscape tile server.
//!
//! Every inbound request, whatever its method or path, is forwarded as a
//! GET to the upstream tile server with the same path and query. The
//! buffered upstream response is relayed with permissive CORS headers so
//! browser clients on other origins can read tiles.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
