//! System clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Reading back forces X11 to take ownership before we move on.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    debug!(chars = text.len(), "copied to clipboard");
    Ok(())
}
