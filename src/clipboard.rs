use crate::errors::{ConfabError, ConfabResult};
use copypasta::{ClipboardContext, ClipboardProvider};

/// Places a message body on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> ConfabResult<()> {
    let mut ctx = ClipboardContext::new()
        .map_err(|e| ConfabError::clipboard_error(format!("Clipboard unavailable: {}", e)))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| ConfabError::clipboard_error(format!("Copy failed: {}", e)))?;

    Ok(())
}
