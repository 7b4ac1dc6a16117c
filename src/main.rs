//! DeepL Exporter - Prometheus metrics for DeepL API character usage
//!
//! This is the main entry point for the exporter server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::{signal, sync::Notify};
use tracing::{info, warn};

use deepl_exporter::{routes, AppState, Config};

/// Time allowed for in-flight scrapes after a shutdown signal
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deepl_exporter=info,tower_http=info".into()),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    let state = Arc::new(AppState::new(&config));
    let app = routes::create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Starting DeepL Prometheus exporter on port {}", config.port);
    info!("Metrics available at http://localhost:{}/metrics", config.port);

    let shutdown = Arc::new(Notify::new());
    let server = {
        let shutdown = shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.notified().await })
    };
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => {
            // The server stopped without being asked to
            result??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    info!("Shutting down server...");
    shutdown.notify_one();

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut server).await {
        Ok(result) => result??,
        Err(_) => {
            warn!("Server forced to shutdown after {:?}", SHUTDOWN_TIMEOUT);
            server.abort();
        }
    }

    info!("Server exited");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating shutdown");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating shutdown");
        }
    }
}
