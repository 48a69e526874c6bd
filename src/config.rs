// ⚙️ Configuration - environment-driven settings
//
// ATLAS_INTRO_FORM_URL   third-party intro form (NEXT_PUBLIC_INTRO_GOOGLE_FORM_URL also accepted)
// ATLAS_CATALOG          profiles | curated
// ATLAS_BIND_ADDR        server listen address
//
// Blank values count as unset.

use serde::Serialize;

use crate::catalog::CatalogSource;
use crate::error::{AtlasError, Result};

pub const INTRO_FORM_URL_VAR: &str = "ATLAS_INTRO_FORM_URL";
pub const LEGACY_INTRO_FORM_URL_VAR: &str = "NEXT_PUBLIC_INTRO_GOOGLE_FORM_URL";
pub const CATALOG_VAR: &str = "ATLAS_CATALOG";
pub const BIND_ADDR_VAR: &str = "ATLAS_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtlasConfig {
    pub intro_form_url: Option<String>,
    pub catalog: CatalogSource,
    pub bind_addr: String,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        AtlasConfig {
            intro_form_url: None,
            catalog: CatalogSource::default(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AtlasConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let intro_form_url = get(INTRO_FORM_URL_VAR).or_else(|| get(LEGACY_INTRO_FORM_URL_VAR));

        let catalog = match get(CATALOG_VAR) {
            Some(value) => value.parse()?,
            None => CatalogSource::default(),
        };

        let bind_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(AtlasConfig { intro_form_url, catalog, bind_addr })
    }

    pub fn with_intro_form_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.intro_form_url = Some(url);
        }
        self
    }

    pub fn with_catalog(mut self, catalog: Option<CatalogSource>) -> Self {
        if let Some(catalog) = catalog {
            self.catalog = catalog;
        }
        self
    }

    /// The intro form link, or the blocking "not configured" error.
    pub fn intro_link(&self) -> Result<&str> {
        self.intro_form_url
            .as_deref()
            .ok_or(AtlasError::IntroFormNotConfigured)
    }
}
