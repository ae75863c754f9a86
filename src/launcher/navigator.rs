//! Opening navigation targets

use anyhow::{Context, Result};
use tracing::info;

/// Opens a resolved URL. Navigation is fire-and-forget: failures are
/// reported to the caller and never retried.
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the system's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &str) -> Result<()> {
        info!("Opening {}", url);
        open::that(url).with_context(|| format!("Unable to open {}", url))
    }
}

/// Prints URLs to stdout instead of opening them
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintOnly;

impl Navigator for PrintOnly {
    fn navigate(&self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}
