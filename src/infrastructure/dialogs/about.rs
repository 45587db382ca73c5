use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
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

use super::backdrop;
use super::centered;

pub fn show<B: Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let body = format!(
        "jotter {}\n\n{}\n\nPress any key to continue",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    );

    loop {
        terminal.draw(|frame| {
            backdrop(frame);
            let rect = centered(frame.area(), 56, 9);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(body.as_str())
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Double)
                            .title("About")
                            .padding(Padding::new(1, 1, 1, 0)),
                    )
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false }),
                rect,
            );
        })?;

        if let CrosstermEvent::Key(_) = crossterm::event::read()? {
            return Ok(());
        }
    }
}
