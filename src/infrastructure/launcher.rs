use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::domain::gateway::SystemGateway;

#[cfg(target_os = "macos")]
const LAUNCHER: &str = "open";
#[cfg(target_os = "windows")]
const LAUNCHER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LAUNCHER: &str = "xdg-open";

/// Default gateway: shells out to the platform launcher. The launcher
/// process returns as soon as the handler is dispatched, so waiting on it
/// does not block the UI for any noticeable time.
pub struct SystemLauncher;

impl SystemLauncher {
    async fn launch(&self, target: &str) -> Result<()> {
        let status = tokio::process::Command::new(LAUNCHER)
            .arg(target)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await
            .with_context(|| format!("failed to spawn {LAUNCHER}"))?;

        if !status.success() {
            bail!("{LAUNCHER} exited with {status}");
        }
        Ok(())
    }
}

#[async_trait]
impl SystemGateway for SystemLauncher {
    async fn open_url(&self, url: &str) -> Result<()> {
        self.launch(url).await
    }

    async fn compose_mail(&self, address: &str) -> Result<()> {
        self.launch(&format!("mailto:{address}")).await
    }
}
