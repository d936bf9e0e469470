//! "View in browser" for markup buffers.
//!
//! The sandbox never renders markup in-process; instead the buffer is
//! written to a transient HTML document and handed to the default browser.
//! Bare stylesheets are wrapped in a fixed demo page so the rules have
//! something to apply to. The document is deleted after a fixed delay, long
//! after the browser has loaded it; the delay is a time box, not a precise
//! lifetime.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::detect::ContentType;
use crate::errors::SandboxError;

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;

pub const CLEANUP_DELAY: Duration = Duration::from_secs(60);

pub struct PreviewLauncher {
    cleanup_delay: Duration,
}

impl Default for PreviewLauncher {
    fn default() -> PreviewLauncher {
        PreviewLauncher {
            cleanup_delay: CLEANUP_DELAY,
        }
    }
}

impl PreviewLauncher {
    pub fn new() -> PreviewLauncher {
        PreviewLauncher::default()
    }

    /// Opens the buffer in the default browser. Failures (no browser, no
    /// display, denied temp dir) are reported as output lines; the sandbox
    /// carries on either way.
    pub fn open(&self, source: &str, content_type: ContentType) -> Vec<String> {
        let document = build_document(source, content_type);
        match self.launch(&document) {
            Ok(path) => vec![format!(
                "🌐 Preview opened in your browser ({})",
                path.display()
            )],
            Err(err) => vec![format!("⚠ Could not open a browser preview: {err}")],
        }
    }

    fn launch(&self, document: &str) -> Result<PathBuf, SandboxError> {
        let mut file = tempfile::Builder::new()
            .prefix("sandpit-preview-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(document.as_bytes())?;
        let (_, path) = file
            .keep()
            .map_err(|err| SandboxError::Preview(err.to_string()))?;

        // Fire-and-forget removal, scheduled before the browser launch so a
        // failed launch does not strand the document on disk.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let delay = self.cleanup_delay;
            let stale = path.clone();
            handle.spawn(async move {
                tokio::time::sleep(delay).await;
                if let Err(err) = std::fs::remove_file(&stale) {
                    tracing::debug!(path = %stale.display(), %err, "preview cleanup skipped");
                }
            });
        }

        opener::open(&path).map_err(|err| SandboxError::Preview(err.to_string()))?;
        Ok(path)
    }
}

/// HTML is passed through unchanged; CSS gets a fixed demo document with
/// sample headings, text, a list, and buttons for the rules to style.
fn build_document(source: &str, content_type: ContentType) -> String {
    match content_type {
        ContentType::Css => format!(
            r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Style preview</title>
<style>
{source}
</style>
</head>
<body>
  <h1>Heading one</h1>
  <h2>Heading two</h2>
  <p>A paragraph of body text to style.</p>
  <ul>
    <li>First item</li>
    <li>Second item</li>
    <li>Third item</li>
  </ul>
  <button>A button</button>
  <a href="#">A link</a>
</body>
</html>
"##
        ),
        ContentType::Html | ContentType::Javascript => source.to_string(),
    }
}
