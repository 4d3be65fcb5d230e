use std::process::Stdio;
use tokio::process::Command as AsyncCommand;

use crate::log_debug;

use super::MapViewer;

impl MapViewer {
    /// Fire-and-forget: the browser process is spawned and never awaited.
    pub async fn open_url(&self, url: &str) -> color_eyre::Result<()> {
        let Some(browser) = self.find_browser().await else {
            return Err(color_eyre::eyre::eyre!(
                "No browser found to open the map. Tried: {}",
                self.browsers.join(", ")
            ));
        };

        let mut cmd = AsyncCommand::new(browser);
        match browser {
            "chromium-browser" | "google-chrome" => cmd.arg(format!("--app={}", url)),
            _ => cmd.arg(url),
        };

        cmd.stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to launch {}: {}", browser, e))?;

        log_debug!("Opened map with: {}", browser);
        Ok(())
    }

    /// First configured opener that resolves on `PATH`.
    async fn find_browser(&self) -> Option<&str> {
        for browser in &self.browsers {
            let found = AsyncCommand::new("which")
                .arg(browser)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .is_ok_and(|status| status.success());
            if found {
                return Some(browser.as_str());
            }
        }
        None
    }
}
