// Japan Startup Atlas - Web Server
// REST API with Axum over the static catalog

use anyhow::{Context, Result};
use startup_atlas::api::{router, AppState};
use startup_atlas::{AtlasConfig, Catalog};

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    startup_atlas::init_tracing("info");

    println!("🌐 Japan Startup Atlas - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = AtlasConfig::from_env()?;
    let catalog = Catalog::load(config.catalog);
    println!("✓ Catalog loaded: {} startups ({})", catalog.len(), catalog.source());

    if config.intro_form_url.is_none() {
        tracing::warn!("ATLAS_INTRO_FORM_URL is not set; intro requests will be refused");
    }

    let addr = config.bind_addr.clone();
    let app = router(AppState::new(catalog, config));

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/companies", addr);
    println!("   UI:  http://{}", addr);
    println!("\n   Press Ctrl+C to stop\n");

    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
