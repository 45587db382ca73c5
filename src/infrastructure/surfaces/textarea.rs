#[cfg(test)]
#[path = "textarea_test.rs"]
mod tests;

use crate::domain::models::EditingSurface;
use crate::domain::models::EmphasisChoice;
use crate::domain::models::Rgb;
use crate::domain::models::TextArea;
use crate::domain::models::TextStyle;
use crate::domain::services::Markup;

/// The real editing surface: a tui-textarea widget plus the document-wide
/// text style the pickers mutate.
pub struct TextAreaSurface {
    pub textarea: tui_textarea::TextArea<'static>,
    style: TextStyle,
}

impl Default for TextAreaSurface {
    fn default() -> TextAreaSurface {
        return TextAreaSurface::new();
    }
}

impl TextAreaSurface {
    pub fn new() -> TextAreaSurface {
        let mut surface = TextAreaSurface {
            textarea: TextArea::default(),
            style: TextStyle::default(),
        };
        surface.apply_style();

        return surface;
    }

    /// Forwards a key to the widget. Returns whether the content changed.
    pub fn input(&mut self, input: impl Into<tui_textarea::Input>) -> bool {
        return self.textarea.input(input);
    }

    /// Inserts plain text at the cursor, as typed. Used for bracketed
    /// terminal pastes, which carry no formatting.
    pub fn insert_text(&mut self, text: &str) -> bool {
        return self.textarea.insert_str(text);
    }

    pub fn style(&self) -> TextStyle {
        return self.style;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.style.color = Some(color);
        self.apply_style();
    }

    pub fn set_emphasis(&mut self, choice: EmphasisChoice) {
        self.style.apply(choice);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        self.textarea.set_style(self.style.to_tui());
    }

    fn selected_text(&self) -> Option<String> {
        let ((start_row, start_col), (end_row, end_col)) = self.textarea.selection_range()?;
        if (start_row, start_col) == (end_row, end_col) {
            return None;
        }

        let lines = self.textarea.lines();
        if start_row == end_row {
            return Some(slice_columns(&lines[start_row], start_col, end_col));
        }

        let mut parts = vec![slice_columns(
            &lines[start_row],
            start_col,
            lines[start_row].chars().count(),
        )];
        for line in lines.iter().take(end_row).skip(start_row + 1) {
            parts.push(line.clone());
        }
        parts.push(slice_columns(&lines[end_row], 0, end_col));

        return Some(parts.join("\n"));
    }
}

fn slice_columns(line: &str, start: usize, end: usize) -> String {
    return line
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect::<String>();
}

impl EditingSurface for TextAreaSurface {
    fn export_markup(&self) -> String {
        return Markup::render(self.textarea.lines(), &self.style);
    }

    fn load_markup(&mut self, markup: &str) {
        let formatted = Markup::parse(markup);
        self.textarea = TextArea::from_lines(formatted.lines);
        self.style = formatted.style;
        self.apply_style();
    }

    fn clear(&mut self) {
        self.textarea = TextArea::default();
        self.style = TextStyle::default();
        self.apply_style();
    }

    fn selection_markup(&self) -> Option<String> {
        let text = self.selected_text()?;
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        return Some(Markup::render(&lines, &self.style));
    }

    fn remove_selection(&mut self) -> bool {
        return self.textarea.cut();
    }

    fn insert_markup(&mut self, markup: &str) {
        let text = Markup::plain_text(markup);
        if text.is_empty() {
            return;
        }

        self.textarea.insert_str(text);
    }
}
