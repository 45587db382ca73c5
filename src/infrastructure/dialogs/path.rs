use std::path::PathBuf;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use tui_textarea::Input;
use tui_textarea::Key;

use super::backdrop;
use super::centered;
use super::default_extension;
use super::extension_filter;
use super::start_dir;

/// A single-line path prompt. Returns `None` when the user cancels or
/// confirms an empty line. Save prompts append the configured default
/// extension to paths given without one; the extension filter is a hint,
/// nothing is enforced.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    title: &str,
    saving: bool,
) -> Result<Option<PathBuf>> {
    let mut field = tui_textarea::TextArea::default();
    field.set_cursor_line_style(Style::default());
    field.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(title.to_string()),
    );

    let seed = start_dir();
    if !seed.is_empty() {
        let mut seed = seed;
        if !seed.ends_with('/') {
            seed.push('/');
        }
        field.insert_str(seed);
    }

    loop {
        terminal.draw(|frame| {
            backdrop(frame);
            let rect = centered(frame.area(), 64, 5);
            frame.render_widget(Clear, rect);
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Max(3), Constraint::Max(2)])
                .split(rect);
            frame.render_widget(&field, layout[0]);
            frame.render_widget(
                Paragraph::new(format!(
                    "{}  Enter confirms, Esc cancels",
                    extension_filter()
                ))
                .style(Style::default().add_modifier(Modifier::DIM)),
                layout[1],
            );
        })?;

        match crossterm::event::read()?.into() {
            Input {
                key: Key::Enter, ..
            } => {
                let text = field.lines().join("").trim().to_string();
                if text.is_empty() {
                    return Ok(None);
                }

                let mut path = PathBuf::from(text);
                let fallback = default_extension();
                if saving && path.extension().is_none() && !fallback.is_empty() {
                    path.set_extension(fallback);
                }

                return Ok(Some(path));
            }
            Input { key: Key::Esc, .. } => return Ok(None),
            input => {
                field.input(input);
            }
        }
    }
}
