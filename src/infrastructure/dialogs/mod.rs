pub mod about;
mod confirm;
mod path;
mod picker;

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use ratatui::Terminal;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ConfirmPrompt;
use crate::domain::models::EmphasisChoice;
use crate::domain::models::PathSelector;
use crate::domain::models::PromptChoice;
use crate::domain::models::Rgb;
use crate::domain::models::StylePicker;
use crate::domain::models::DIALOG_EXTENSIONS;

/// Modal dialogs drawn over the editor. Each one runs its own blocking
/// read loop until the user decides, so the calling flow reads like a
/// plain function call.
pub struct TuiDialogs<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> TuiDialogs<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> TuiDialogs<'a, B> {
        return TuiDialogs { terminal };
    }
}

#[async_trait]
impl<B: Backend + Send> ConfirmPrompt for TuiDialogs<'_, B> {
    async fn ask(&mut self, title: &str, message: &str) -> Result<PromptChoice> {
        return confirm::run(self.terminal, title, message);
    }
}

#[async_trait]
impl<B: Backend + Send> PathSelector for TuiDialogs<'_, B> {
    async fn open_path(&mut self) -> Result<Option<PathBuf>> {
        return path::run(self.terminal, "Open File", false);
    }

    async fn save_path(&mut self) -> Result<Option<PathBuf>> {
        return path::run(self.terminal, "Save File", true);
    }
}

#[async_trait]
impl<B: Backend + Send> StylePicker for TuiDialogs<'_, B> {
    async fn pick_color(&mut self) -> Result<Option<Rgb>> {
        return picker::pick_color(self.terminal);
    }

    async fn pick_emphasis(&mut self) -> Result<Option<EmphasisChoice>> {
        return picker::pick_emphasis(self.terminal);
    }
}

/// The "Files (*.html *.txt *.log)" hint shown by both path dialogs.
pub(crate) fn extension_filter() -> String {
    return format!("Files (*.{})", DIALOG_EXTENSIONS.join(" *."));
}

pub(crate) fn default_extension() -> String {
    return Config::get(ConfigKey::DefaultExtension);
}

pub(crate) fn start_dir() -> String {
    return Config::get(ConfigKey::StartDir);
}

pub(crate) fn backdrop(frame: &mut Frame) {
    frame.render_widget(
        Block::default().style(Style::default().add_modifier(Modifier::DIM)),
        frame.area(),
    );
}

pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    return Rect::new(x, y, width, height);
}
