use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of trimmed input lines, one per call.
///
/// `None` means the underlying stream is closed; the session loop treats
/// that the same as an explicit quit.
#[async_trait]
pub trait LineSource: Send {
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Sink for user-facing output.
///
/// `print` writes without a trailing newline and flushes, so the prompt is
/// visible before the next read blocks.
pub trait Console: Clone + Send + Sync {
    fn print(&self, text: &str);
    fn println(&self, text: &str);
}
