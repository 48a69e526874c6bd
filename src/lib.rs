// Japan Startup Atlas - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod company;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intro;
pub mod query;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use company::{Company, Readiness, ReadinessMeta, TotalFunding};
pub use catalog::{Catalog, CatalogSource, fetch, get_companies};
pub use config::AtlasConfig;
pub use error::AtlasError;
pub use intro::{LinkOpener, SystemBrowser, request_intro};
pub use query::{
    Facet, FilterParams, SortMode,
    filter_companies, sort_companies, locale_compare,
    all_tags, all_stages, find_company, featured, recently_updated, parse_month_year,
    FEATURED_LIMIT, RECENT_LIMIT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize `tracing` for a binary: RUST_LOG wins, otherwise `default_level`.
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
