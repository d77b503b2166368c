//! Terminal stand-ins for the device capabilities.
//!
//! A terminal has no camera and no share sheet, so the camera "captures" an
//! existing image file, QR payloads are read as stdin lines and sharing
//! prints the photo location for the next program in a pipe.

use std::path::PathBuf;

use async_trait::async_trait;
use bodyscale_common::error::{CapabilityError, CapabilityResult};
use bodyscale_core::capability::{BarcodeSource, Camera, PhotoSharer, PhotoUri, UrlOpener};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::process::Command;
use tracing::debug;

use crate::terminal::print;

/// Permission is granted only when an image file was supplied.
pub struct FileCamera {
    source: Option<PathBuf>,
}

impl FileCamera {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Camera for FileCamera {
    async fn request_permission(&mut self) -> bool {
        self.source.is_some()
    }

    async fn capture(&mut self) -> CapabilityResult<PhotoUri> {
        let Some(path) = &self.source else {
            return Err(CapabilityError::PermissionDenied);
        };

        let path = tokio::fs::canonicalize(path)
            .await
            .map_err(|e| CapabilityError::Capture(format!("{}: {e}", path.display())))?;
        Ok(format!("file://{}", path.display()))
    }
}

pub struct StdinBarcodes {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinBarcodes {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl BarcodeSource for StdinBarcodes {
    /// Blank lines are skipped. A read error closes the source.
    async fn next_detection(&mut self) -> Option<String> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => return Some(line.trim().to_string()),
                Ok(None) => return None,
                Err(e) => {
                    debug!(%e, "stdin closed");
                    return None;
                }
            }
        }
    }
}

/// Hands links to the platform's default handler.
pub struct SystemOpener;

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&mut self, url: &str) -> CapabilityResult<()> {
        let mut command = opener_command(url);
        let status = command
            .status()
            .await
            .map_err(|_| CapabilityError::Unopenable(url.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CapabilityError::Unopenable(url.to_string()))
        }
    }
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

pub struct StdoutSharer;

#[async_trait]
impl PhotoSharer for StdoutSharer {
    async fn share(&mut self, uri: &str) -> CapabilityResult<()> {
        print::print(uri);
        Ok(())
    }
}
