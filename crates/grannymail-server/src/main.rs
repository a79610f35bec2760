//! GrannyMail website server entry point.
//!
//! Loads configuration, renders every page once, then serves them with Axum
//! until SIGINT or SIGTERM triggers a graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use grannymail_pages::SiteMeta;
use grannymail_server::config::{LogFormat, ServerConfig};
use grannymail_server::routes;
use grannymail_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    init_logging(&config);

    info!(site_url = %config.site_url, "GrannyMail site starting");

    let site = SiteMeta::new(&config.site_url);
    let state = Arc::new(
        AppState::new(site, config.cache_max_age_secs)
            .context("invalid cache configuration")?,
    );

    let app = routes::app(Arc::clone(&state), config.max_concurrent_requests);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "GrannyMail site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("GrannyMail site stopped");
    Ok(())
}

/// Initialize structured logging. `RUST_LOG` takes precedence over the
/// configured level.
fn init_logging(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).pretty().init(),
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            // Without a SIGTERM handler only Ctrl-C stops the server.
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
