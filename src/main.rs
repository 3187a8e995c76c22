//! Gateway console server.
//!
//! Serves the built dashboard with SPA fallback and exposes the navigation
//! resolver as JSON.
//!
//! ```text
//!     Browser ──▶ listener ──▶ axum router ──┬──▶ /api/nav/*  ──▶ RouteTable
//!                                            ├──▶ /health
//!                                            └──▶ dist/ (index.html fallback)
//! ```

use std::path::PathBuf;

use clap::Parser;

use gateway_console::config::NavVariant;
use gateway_console::lifecycle::startup;
use gateway_console::observability::logging;
use gateway_console::Shutdown;

#[derive(Parser)]
#[command(name = "gateway-console")]
#[command(about = "Device-management dashboard server", long_about = None)]
struct Args {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the built-in navigation table.
    #[arg(long, value_enum)]
    variant: Option<NavVariant>,

    /// Override the directory holding the built dashboard.
    #[arg(long)]
    dist: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = startup::load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(variant) = args.variant {
        config.navigation.variant = variant;
    }
    if let Some(dist) = args.dist {
        config.listener.dist_dir = Some(dist);
    }

    logging::init_logging(&config.observability);

    tracing::info!("gateway-console v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        variant = ?config.navigation.variant,
        custom_table = config.navigation.table.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    shutdown.on_os_signal();

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
