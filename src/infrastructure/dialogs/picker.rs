use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use tui_textarea::Input;
use tui_textarea::Key;

use super::backdrop;
use super::centered;
use crate::domain::models::EmphasisChoice;
use crate::domain::models::Rgb;

const PALETTE: [(&str, Rgb); 8] = [
    ("White", Rgb { r: 0xff, g: 0xff, b: 0xff }),
    ("Gray", Rgb { r: 0xab, g: 0xb2, b: 0xbf }),
    ("Red", Rgb { r: 0xe0, g: 0x6c, b: 0x75 }),
    ("Green", Rgb { r: 0x98, g: 0xc3, b: 0x79 }),
    ("Yellow", Rgb { r: 0xe5, g: 0xc0, b: 0x7b }),
    ("Blue", Rgb { r: 0x61, g: 0xaf, b: 0xef }),
    ("Magenta", Rgb { r: 0xc6, g: 0x78, b: 0xdd }),
    ("Cyan", Rgb { r: 0x56, g: 0xb6, b: 0xc2 }),
];

const EMPHASIS: [(&str, EmphasisChoice); 4] = [
    ("Regular", EmphasisChoice::Regular),
    ("Bold", EmphasisChoice::Bold),
    ("Italic", EmphasisChoice::Italic),
    ("Underline", EmphasisChoice::Underline),
];

pub fn pick_color<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<Rgb>> {
    let labels = PALETTE
        .iter()
        .map(|(label, _)| return *label)
        .collect::<Vec<&str>>();

    let picked = pick(terminal, "Text Color", &labels)?;
    return Ok(picked.map(|idx| return PALETTE[idx].1));
}

pub fn pick_emphasis<B: Backend>(terminal: &mut Terminal<B>) -> Result<Option<EmphasisChoice>> {
    let labels = EMPHASIS
        .iter()
        .map(|(label, _)| return *label)
        .collect::<Vec<&str>>();

    let picked = pick(terminal, "Text Emphasis", &labels)?;
    return Ok(picked.map(|idx| return EMPHASIS[idx].1));
}

fn pick<B: Backend>(
    terminal: &mut Terminal<B>,
    title: &str,
    labels: &[&str],
) -> Result<Option<usize>> {
    let mut state = ListState::default();
    state.select(Some(0));

    loop {
        terminal.draw(|frame| {
            backdrop(frame);
            let rect = centered(frame.area(), 32, labels.len() as u16 + 2);
            frame.render_widget(Clear, rect);
            let list = List::new(
                labels
                    .iter()
                    .map(|label| return ListItem::new(*label))
                    .collect::<Vec<ListItem>>(),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(title.to_string()),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
            frame.render_stateful_widget(list, rect, &mut state);
        })?;

        match crossterm::event::read()?.into() {
            Input { key: Key::Up, .. } => {
                let current = state.selected().unwrap_or(0);
                state.select(Some(current.saturating_sub(1)));
            }
            Input { key: Key::Down, .. } => {
                let current = state.selected().unwrap_or(0);
                state.select(Some((current + 1).min(labels.len() - 1)));
            }
            Input {
                key: Key::Enter, ..
            } => return Ok(state.selected()),
            Input { key: Key::Esc, .. } => return Ok(None),
            _ => {}
        }
    }
}
