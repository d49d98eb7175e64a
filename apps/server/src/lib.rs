//! # SME Risk Analysis Server
//!
//! Serves the landing page, health probe and `OpenAPI` documentation over
//! `Axum`, with optional TLS and graceful shutdown.
//!
//! ## Example
//! ```no_run
//! use sme_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8000)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

pub use router::{DOCS_PATH, OPENAPI_PATH};

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use sme::domain::config::ApiConfig;
use sme::kernel::server::ApiState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// Time in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Collects configuration before [`ServerBuilder::build`] renders the slices.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    fn check_tls_files(&self) -> Result<()> {
        let Some(ssl) = &self.cfg.server.ssl else {
            return Ok(());
        };

        for (kind, path) in [("certificate", &ssl.cert), ("key", &ssl.key)] {
            if !path.exists() {
                anyhow::bail!("SSL {kind} not found at: {}", path.display());
            }
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if ssl.key.metadata()?.permissions().mode() & 0o077 != 0 {
                warn!(key = %ssl.key.display(), "TLS private key is readable by group or others");
            }
        }
        Ok(())
    }

    /// Validates TLS files, initializes the feature slices and assembles the router.
    ///
    /// # Errors
    /// Fails when a TLS file is missing, a slice cannot initialize (invalid
    /// theme palette) or a CORS origin is not a valid header value.
    pub fn build(self) -> Result<Server> {
        self.check_tls_files()?;

        let slices = sme::init(&self.cfg).context("Platform bootstrap failed")?;
        let state = ApiState::builder().config(self.cfg).register_slices(slices).build();
        info!(slices = ?state.slice_names().collect::<Vec<_>>(), "Feature slices registered");

        let router = router::init(state.clone()).context("Failed to assemble router")?;
        Ok(Server { state, router })
    }
}

/// An initialized server: shared state plus the fully layered router.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
    router: Router,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Binds the configured address (TLS when `server.ssl` is set) and serves
    /// until SIGINT/SIGTERM, then drains for [`SHUTDOWN_GRACE`].
    ///
    /// # Errors
    /// Fails if binding or loading the TLS material fails.
    pub async fn run(self) -> Result<()> {
        let server = &self.state.config.server;
        let address = SocketAddr::new(server.address, server.port);
        let app = self.router.into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        if let Some(ssl) = &server.ssl {
            let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                .await
                .context("Failed to load SSL/TLS certificates")?;

            info!(%address, scheme = "https", "Listening");
            axum_server::bind_rustls(address, tls)
                .handle(handle)
                .serve(app)
                .await
                .context("HTTPS server failed")?;
        } else {
            info!(%address, scheme = "http", "Listening");
            axum_server::bind(address).handle(handle).serve(app).await.context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }

    /// The fully layered router, for in-process requests.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

async fn drain_on_signal(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(name) => {
            info!(signal = name, "Shutdown requested, draining connections");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        }
        Err(e) => error!(error = %e, "Cannot listen for shutdown signals"),
    }
}

/// Resolves with the name of the first signal received (SIGINT or SIGTERM).
async fn shutdown_signal() -> Result<&'static str> {
    let ctrl_c = async {
        signal::ctrl_c().await.context("Failed to install Ctrl+C handler")?;
        Ok::<_, anyhow::Error>("SIGINT")
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>("SIGTERM")
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<&'static str>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
