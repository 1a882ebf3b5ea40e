use anyhow::{Context, Result};
use render_modes_core::SiteConfig;
use render_modes_generator::{PageCache, Site};
use std::sync::Arc;
use tracing::{info, warn};

use crate::live::LiveExtras;
use crate::server::router;

/// Serve the site with each page's rendering policy honored.
///
/// This command:
/// - Builds the compiled-in site (fatal on invalid record sets)
/// - Prerenders Static and Interval pages, as a build would
/// - Serves pages as HTML and documents as JSON until Ctrl+C
///
/// # Arguments
///
/// * `config` - Loaded site configuration
/// * `port` - Port override (default comes from site.toml)
pub async fn run(config: SiteConfig, port: Option<u16>) -> Result<()> {
    let site = Arc::new(Site::demo().context("Invalid page catalog")?);
    let ids = site.page_ids();

    let cache = PageCache::new(site).with_extras(Arc::new(LiveExtras::new(&config.dashboard)));
    cache.warm(&ids).context("Failed to prerender pages")?;

    let mut addr = config.server.addr();
    if let Some(port) = port {
        addr.set_port(port);
    }

    let app = router(Arc::new(cache));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, "Serving rendering modes");
    println!("🚀 Serving at: http://{}", addr);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    info!("Shutdown signal received");
}
