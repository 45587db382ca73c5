use std::sync::Mutex;

use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::Lazy;

static CLIPBOARD: Lazy<Mutex<Option<arboard::Clipboard>>> = Lazy::new(|| return Mutex::new(None));

/// Process-wide handle on the system clipboard. Initialized once at
/// startup; on headless terminals init fails and the copy/cut/paste
/// actions degrade to a status-line warning.
pub struct ClipboardService {}

impl ClipboardService {
    pub fn init() -> Result<()> {
        let clipboard = arboard::Clipboard::new()?;
        CLIPBOARD.lock().unwrap().replace(clipboard);
        return Ok(());
    }

    pub fn set_markup(markup: &str, plain: &str) -> Result<()> {
        let mut guard = CLIPBOARD.lock().unwrap();
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| return anyhow!("Clipboard service is not initialized."))?;

        clipboard.set_html(markup, Some(plain))?;
        return Ok(());
    }

    /// The clipboard's formatted payload, `None` when it carries no
    /// markup (plain text included).
    pub fn markup() -> Result<Option<String>> {
        let mut guard = CLIPBOARD.lock().unwrap();
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| return anyhow!("Clipboard service is not initialized."))?;

        match clipboard.get().html() {
            Ok(payload) => return Ok(Some(payload)),
            Err(arboard::Error::ContentNotAvailable) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}
