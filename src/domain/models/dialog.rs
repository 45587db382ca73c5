use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use super::EmphasisChoice;
use super::Rgb;

/// Extensions advertised by the open and save dialogs. A filter hint only,
/// never enforced on read or write.
pub const DIALOG_EXTENSIONS: [&str; 3] = ["html", "txt", "log"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptChoice {
    Yes,
    No,
    Cancel,
}

#[async_trait]
pub trait ConfirmPrompt {
    /// Poses a three-way question and blocks until the user picks.
    async fn ask(&mut self, title: &str, message: &str) -> Result<PromptChoice>;
}

#[async_trait]
pub trait PathSelector {
    /// Asks for a file to open. `None` when the selection was cancelled or
    /// left empty.
    async fn open_path(&mut self) -> Result<Option<PathBuf>>;

    /// Asks for a destination to write to. Same cancellation contract as
    /// [`PathSelector::open_path`].
    async fn save_path(&mut self) -> Result<Option<PathBuf>>;
}

/// The guarded document flows need both capabilities, usually served by
/// one adapter.
pub trait Dialogs: ConfirmPrompt + PathSelector {}

impl<T> Dialogs for T where T: ConfirmPrompt + PathSelector {}

#[async_trait]
pub trait StylePicker {
    async fn pick_color(&mut self) -> Result<Option<Rgb>>;

    async fn pick_emphasis(&mut self) -> Result<Option<EmphasisChoice>>;
}
