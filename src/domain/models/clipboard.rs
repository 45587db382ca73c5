use anyhow::Result;

/// A clipboard that carries formatted markup rather than plain
/// characters. Paste flows check payload presence before reading.
pub trait FormattedClipboard {
    fn set_markup(&mut self, markup: &str) -> Result<()>;

    /// The current formatted payload, `None` when the clipboard holds
    /// none.
    fn markup(&mut self) -> Result<Option<String>>;
}
