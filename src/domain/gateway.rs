use anyhow::Result;
use async_trait::async_trait;

/// Boundary for everything that leaves the terminal: external URLs and
/// mail-composition links. The reducer never calls this directly; the
/// runtime executes it for `Command`s and reports back as actions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemGateway: Send + Sync {
    // Open a URL in whatever the platform considers a browser
    async fn open_url(&self, url: &str) -> Result<()>;

    // Hand a mailto: link to the platform mail client
    async fn compose_mail(&self, address: &str) -> Result<()>;
}
