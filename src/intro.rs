// 🤝 Intro requests - hand-off to the third-party intro form
//
// The only failure in the system: when no form URL is configured the caller
// gets `IntroFormNotConfigured` and must show it as a blocking notice.

use crate::company::Company;
use crate::config::AtlasConfig;
use crate::error::{AtlasError, Result};

/// Something that can show a URL to the user in a fresh browser context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the system browser.
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| AtlasError::BrowserLaunchFailed(e.to_string()))
    }
}

/// Resolve the intro link and hand it to `opener`. Returns the opened URL.
pub fn request_intro<O: LinkOpener>(
    config: &AtlasConfig,
    company: &Company,
    opener: &O,
) -> Result<String> {
    let url = match config.intro_link() {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(company = %company.id, "intro requested but no form URL configured");
            return Err(e);
        }
    };

    opener.open(url)?;
    tracing::info!(company = %company.id, "opened intro form");

    Ok(url.to_string())
}
