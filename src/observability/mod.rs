//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Proxy handler and tower-http layers produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through log events and response headers
//! - Metrics are cheap and no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
