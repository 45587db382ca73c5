use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::Alignment;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tui_textarea::Input;
use tui_textarea::Key;

use super::backdrop;
use super::centered;
use crate::domain::models::PromptChoice;

pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    title: &str,
    message: &str,
) -> Result<PromptChoice> {
    loop {
        terminal.draw(|frame| {
            backdrop(frame);
            let rect = centered(frame.area(), 48, 7);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(format!("{message}\n\n[Y]es    [N]o    [Esc] Cancel"))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Double)
                            .title(title.to_string())
                            .padding(Padding::new(1, 1, 1, 0)),
                    )
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false }),
                rect,
            );
        })?;

        match crossterm::event::read()?.into() {
            Input {
                key: Key::Char('y'),
                ..
            } => return Ok(PromptChoice::Yes),
            Input {
                key: Key::Char('n'),
                ..
            } => return Ok(PromptChoice::No),
            Input { key: Key::Esc, .. } => return Ok(PromptChoice::Cancel),
            _ => {}
        }
    }
}
