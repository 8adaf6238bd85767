//! Headless-browser print pipeline.
//!
//! The export snapshot is staged as a temporary file and loaded over a
//! `file://` URL, so the browser renders a plain finished document with no
//! connection back to the running service. Each export launches a fresh
//! browser and tears it down before returning.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Failures inside the print pipeline. Clients see a single pipeline error;
/// the variants keep the logs specific.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("browser configuration failed: {0}")]
    Config(String),

    #[error("browser session failed: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("snapshot staging failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("printer returned an empty document")]
    EmptyArtifact,
}

/// Turns a finished HTML snapshot into PDF bytes.
#[async_trait]
pub trait PrintPipeline: Send + Sync {
    async fn print(&self, html: &str) -> Result<Bytes, PrintError>;
}

/// Prints through a headless Chromium session driven over CDP.
pub struct ChromiumPrinter {
    chrome_executable: Option<PathBuf>,
}

impl ChromiumPrinter {
    /// `chrome_executable` overrides browser autodetection when set.
    pub fn new(chrome_executable: Option<PathBuf>) -> Self {
        Self { chrome_executable }
    }

    fn browser_config(&self) -> Result<BrowserConfig, PrintError> {
        let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
        ]);
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(PrintError::Config)
    }

    async fn print_page(browser: &Browser, url: &str) -> Result<Bytes, PrintError> {
        let page = browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        let params = PrintToPdfParams {
            print_background: Some(true),
            prefer_css_page_size: Some(true),
            ..Default::default()
        };
        let pdf = page.pdf(params).await?;
        if pdf.is_empty() {
            return Err(PrintError::EmptyArtifact);
        }
        Ok(Bytes::from(pdf))
    }
}

#[async_trait]
impl PrintPipeline for ChromiumPrinter {
    async fn print(&self, html: &str) -> Result<Bytes, PrintError> {
        let mut staged = tempfile::Builder::new()
            .prefix("vitae-export-")
            .suffix(".html")
            .tempfile()?;
        staged.write_all(html.as_bytes())?;
        let url = format!("file://{}", staged.path().display());
        debug!("staged export snapshot at {url}");

        let config = self.browser_config()?;
        let (mut browser, mut handler) = Browser::launch(config).await?;
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        // The first page attach races a fresh launch without this.
        sleep(Duration::from_millis(300)).await;

        let result = Self::print_page(&browser, &url).await;

        // Drain the event loop after a clean close; abort it otherwise so a
        // wedged browser cannot hang the export.
        match browser.close().await {
            Ok(_) => {
                let _ = events.await;
            }
            Err(e) => {
                warn!("browser close failed: {e}");
                events.abort();
            }
        }
        drop(staged);

        result
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test doubles
// ────────────────────────────────────────────────────────────────────────────


// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
