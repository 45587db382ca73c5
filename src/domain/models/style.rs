#[cfg(test)]
#[path = "style_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(&self) -> String {
        return format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
    }

    pub fn parse_hex(text: &str) -> Option<Rgb> {
        let hex = text.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Rgb { r, g, b });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmphasisChoice {
    Regular,
    Bold,
    Italic,
    Underline,
}

/// Document-wide text style. It is part of the exported markup, so
/// changing it counts as an edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn is_plain(&self) -> bool {
        return self.color.is_none() && !self.bold && !self.italic && !self.underline;
    }

    pub fn apply(&mut self, choice: EmphasisChoice) {
        match choice {
            EmphasisChoice::Regular => {
                self.bold = false;
                self.italic = false;
                self.underline = false;
            }
            EmphasisChoice::Bold => self.bold = !self.bold,
            EmphasisChoice::Italic => self.italic = !self.italic,
            EmphasisChoice::Underline => self.underline = !self.underline,
        }
    }

    pub fn to_tui(&self) -> Style {
        let mut style = Style::default();
        if let Some(color) = self.color {
            style = style.fg(Color::Rgb(color.r, color.g, color.b));
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        return style;
    }
}
