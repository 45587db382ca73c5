use anyhow::Result;

use crate::domain::models::FormattedClipboard;
use crate::domain::services::clipboard::ClipboardService;
use crate::domain::services::Markup;

/// The OS clipboard. Markup goes out as an HTML payload with a plain-text
/// fallback; reads only report formatted payloads.
#[derive(Default)]
pub struct SystemClipboard {}

impl FormattedClipboard for SystemClipboard {
    fn set_markup(&mut self, markup: &str) -> Result<()> {
        return ClipboardService::set_markup(markup, &Markup::plain_text(markup));
    }

    fn markup(&mut self) -> Result<Option<String>> {
        return ClipboardService::markup();
    }
}
