//! newsfeed-web - HTTP read API for newsfeed using Axum

pub mod error;
pub mod router;

pub use error::AppError;
pub use router::create_router;

use anyhow::{Context, Result};
use newsfeed_core::{NewsStore, StorySource};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server until Ctrl+C
pub async fn run<S: StorySource>(store: Arc<NewsStore<S>>, addr: SocketAddr) -> Result<()> {
    let router = create_router(store);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener.local_addr()?;

    info!("Web server listening on http://{}", local);
    println!("Web server listening on http://{}", local);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
