use std::time::Duration;

use arboard::Clipboard;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::services::ClipboardService;

/// Writes to the desktop clipboard.
///
/// On X11 and Wayland the writing process owns the selection, so the text would vanish when the
/// CLI exits. There the write blocks until another owner (usually a clipboard manager) takes the
/// selection over, or until `hold` runs out. A zero `hold` skips the wait.
pub struct SystemClipboard {
    hold: Duration,
}

impl SystemClipboard {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    pub fn holds_selection(&self) -> bool {
        cfg!(target_os = "linux") && !self.hold.is_zero()
    }
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let text = text.to_string();
        let len = text.len();
        let hold = self.holds_selection().then_some(self.hold);
        if let Some(hold) = hold {
            info!(seconds = hold.as_secs(), "holding clipboard until it is taken over");
            eprintln!(
                "Keeping the clipboard available for up to {}s; paste now or press Ctrl-C.",
                hold.as_secs()
            );
        }

        tokio::task::spawn_blocking(move || {
            let mut clipboard = Clipboard::new()
                .map_err(|err| AppError::Clipboard(format!("clipboard unavailable: {err}")))?;
            set_text(&mut clipboard, text, hold)
                .map_err(|err| AppError::Clipboard(format!("failed to write clipboard: {err}")))
        })
        .await
        .map_err(|err| AppError::Clipboard(format!("clipboard task failed: {err}")))??;

        debug!(bytes = len, "copied text to clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut Clipboard,
    text: String,
    hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    use std::time::Instant;

    use arboard::SetExtLinux;

    match hold {
        Some(hold) => clipboard.set().wait_until(Instant::now() + hold).text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut Clipboard,
    text: String,
    _hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
