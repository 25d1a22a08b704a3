//! Share summary and share targets
//!
//! The calculator only builds the text; where it ends up is up to a
//! [`ShareTarget`]. When the preferred target is unavailable the clipboard
//! text goes to a fallback target instead.

use crate::core::tier::Tier;
use crate::{info, warn};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Title attached to every share
pub const SHARE_TITLE: &str = "The Cooked Calculator";

/// A composed share: title, summary text and canonical URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    /// Share sheet title
    pub title: String,
    /// Summary sentence with percentage and tier description
    pub text: String,
    /// Canonical URL of the calculator
    pub url: String,
}

impl ShareMessage {
    /// Compose the share for a result
    #[must_use]
    pub fn compose(percentage: u8, tier: Tier, url: &str) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!(
                "I'm {percentage}% cooked. {} Check your own fate:",
                tier.description()
            ),
            url: url.to_string(),
        }
    }

    /// Replace the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Text placed on the clipboard when no share surface exists
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        if self.url.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", self.text, self.url)
        }
    }
}

/// What a target did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to a share surface
    Shared,
    /// Copied to a clipboard stand-in
    Copied(PathBuf),
}

/// Errors from a share target
#[derive(Debug, Error)]
pub enum ShareError {
    /// The target does not exist on this platform
    #[error("No share surface available")]
    Unavailable,
    /// Writing the message failed
    #[error("Failed to share result: {0}")]
    Io(#[from] io::Error),
}

/// A place a share message can be sent
pub trait ShareTarget {
    /// Deliver the message
    ///
    /// # Errors
    /// Returns `ShareError::Unavailable` if the target cannot be used, or
    /// `ShareError::Io` if delivery fails
    fn share(&self, message: &ShareMessage) -> Result<ShareOutcome, ShareError>;
}

/// Prints the share block to a writer (stdout by default)
#[derive(Debug, Default)]
pub struct PrintShare;

impl PrintShare {
    /// Write the share block to `out`
    ///
    /// # Errors
    /// Returns an error if writing fails
    pub fn write_to<W: Write + ?Sized>(out: &mut W, message: &ShareMessage) -> io::Result<()> {
        writeln!(out, "--- {} ---", message.title)?;
        writeln!(out, "{}", message.clipboard_text())
    }
}

impl ShareTarget for PrintShare {
    fn share(&self, message: &ShareMessage) -> Result<ShareOutcome, ShareError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        Self::write_to(&mut lock, message)?;
        lock.flush()?;
        Ok(ShareOutcome::Shared)
    }
}

/// Clipboard stand-in: writes the clipboard text to a file
#[derive(Debug, Clone)]
pub struct ClipboardFile {
    path: PathBuf,
}

impl ClipboardFile {
    /// Create a clipboard file target
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShareTarget for ClipboardFile {
    fn share(&self, message: &ShareMessage) -> Result<ShareOutcome, ShareError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, message.clipboard_text())?;
        Ok(ShareOutcome::Copied(self.path.clone()))
    }
}

/// Try `primary`, and on any error hand the message to `fallback`.
///
/// # Errors
/// Returns the fallback's error if both targets fail
pub fn share_with_fallback(
    primary: &dyn ShareTarget,
    fallback: &dyn ShareTarget,
    message: &ShareMessage,
) -> Result<ShareOutcome, ShareError> {
    match primary.share(message) {
        Ok(outcome) => Ok(outcome),
        Err(ShareError::Unavailable) => {
            info!("Share surface unavailable, copying result instead");
            fallback.share(message)
        }
        Err(e) => {
            warn!("{e}; copying result instead");
            fallback.share(message)
        }
    }
}
