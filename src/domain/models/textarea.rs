use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        return TextArea::from_lines(vec!["".to_string()]);
    }

    pub fn from_lines(lines: Vec<String>) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.set_cursor_line_style(Style::default());

        return textarea;
    }
}
