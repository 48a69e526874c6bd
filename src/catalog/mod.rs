// Entity Catalog - fixed, hand-authored company records
//
// Two sources exist for the same directory feature:
// - profiles: full editorial sheets (default)
// - curated:  the slimmer seed list
// Both are adapted into `Company` at this boundary. Nothing here is ever written.

pub mod curated;
pub mod profiles;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::company::Company;
use crate::error::AtlasError;
use crate::query;

pub use curated::{CuratedStartup, CURATED};
pub use profiles::{ProfileRecord, PROFILES};

// ============================================================================
// CATALOG SOURCE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    #[default]
    Profiles,
    Curated,
}

impl CatalogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSource::Profiles => "profiles",
            CatalogSource::Curated => "curated",
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogSource {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profiles" | "profile" => Ok(CatalogSource::Profiles),
            "curated" | "seed" => Ok(CatalogSource::Curated),
            _ => Err(AtlasError::InvalidCatalogSource(s.to_string())),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Materialized companies of one source, in authored order.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: CatalogSource,
    companies: Vec<Company>,
}

impl Catalog {
    pub fn load(source: CatalogSource) -> Self {
        let companies: Vec<Company> = match source {
            CatalogSource::Profiles => PROFILES.iter().map(Company::from).collect(),
            CatalogSource::Curated => CURATED.iter().map(Company::from).collect(),
        };

        tracing::debug!(source = %source, count = companies.len(), "catalog loaded");

        Catalog { source, companies }
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn into_companies(self) -> Vec<Company> {
        self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Company> {
        query::find_company(&self.companies, id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::load(CatalogSource::default())
    }
}

/// Async accessor for the default catalog. Resolves immediately, never fails.
pub async fn get_companies() -> Vec<Company> {
    fetch(CatalogSource::default()).await
}

/// Async accessor for a specific source.
pub async fn fetch(source: CatalogSource) -> Vec<Company> {
    Catalog::load(source).into_companies()
}
