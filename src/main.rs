//! Soundscape tile proxy.
//!
//! ```text
//!     Browser                 ┌──────────────────────────────────────┐
//!     ───────────────────────▶│ catch-all route (any method, path)   │
//!                             │   → request id, trace, timeout       │
//!                             │   → GET <upstream><path?query>       │──────▶ tile server
//!                             │   → buffer status, headers, body     │◀──────
//!     ◀───────────────────────│   → relay + CORS headers             │
//!                             └──────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use tile_proxy::lifecycle::signals::spawn_signal_handler;
use tile_proxy::lifecycle::startup::{resolve_config, Overrides};
use tile_proxy::observability::{logging, metrics};
use tile_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "tile-proxy")]
#[command(version, about = "CORS-enabling reverse proxy for the Soundscape tile server", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener bind address, e.g. 127.0.0.1:8080.
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream base URL, without a trailing slash.
    #[arg(long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        Overrides {
            bind_address: cli.bind,
            upstream_url: cli.upstream,
        },
    )?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_handler(shutdown);

    HttpServer::new(config)?.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
