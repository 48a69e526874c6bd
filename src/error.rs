// Atlas errors
//
// The query engine and catalog are total; these cover the intro link and
// parsing of user-supplied filter values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error(
        "Intro form URL is not configured.\n\nSet ATLAS_INTRO_FORM_URL (or NEXT_PUBLIC_INTRO_GOOGLE_FORM_URL) in the environment (and restart)."
    )]
    IntroFormNotConfigured,

    #[error("could not open browser: {0}")]
    BrowserLaunchFailed(String),

    #[error("no company with id '{0}'")]
    UnknownCompany(String),

    #[error("invalid readiness '{0}' (expected all, green, yellow or red)")]
    InvalidReadiness(String),

    #[error("invalid sort mode '{0}' (expected relevance, name or founded_desc)")]
    InvalidSortMode(String),

    #[error("invalid catalog source '{0}' (expected profiles or curated)")]
    InvalidCatalogSource(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
