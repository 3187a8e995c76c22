//! OS signal handling and shutdown fan-out.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl+C) and, on unix, SIGTERM
//! - Fan the first stop request out to the running HTTP server
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A handler that fails to install never fires instead of aborting startup
//! - The handle is a cloned broadcast sender, so the signal task and tests
//!   can both hold one without an Arc

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Stop handle shared by the signal task and the HTTP server.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver handed to [`crate::http::HttpServer::run`].
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop.
    ///
    /// Returns false when nothing was listening yet.
    pub fn trigger(&self) -> bool {
        self.tx.send(()).is_ok()
    }

    /// Trigger this handle on the first stop signal from the OS.
    pub fn on_os_signal(&self) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            stop_signal().await;
            tracing::info!("Stop signal received, shutting down");
            handle.trigger();
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once the process is asked to stop.
pub async fn stop_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
