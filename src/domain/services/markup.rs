#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

use crate::domain::models::Rgb;
use crate::domain::models::TextStyle;

pub struct FormattedText {
    pub lines: Vec<String>,
    pub style: TextStyle,
}

/// Codec for the formatted-markup dialect used in save files and
/// clipboard payloads. `render` always emits the canonical nesting
/// (span, then b, i, u), which is what makes save -> load -> export
/// byte-identical.
pub struct Markup {}

impl Markup {
    pub fn render(lines: &[String], style: &TextStyle) -> String {
        let body = lines
            .iter()
            .map(|line| return Markup::escape(line))
            .collect::<Vec<String>>()
            .join("\n");

        if style.is_plain() {
            return body;
        }

        let mut out = body;
        if style.underline {
            out = format!("<u>{out}</u>");
        }
        if style.italic {
            out = format!("<i>{out}</i>");
        }
        if style.bold {
            out = format!("<b>{out}</b>");
        }
        if let Some(color) = &style.color {
            out = format!("<span style=\"color:{}\">{out}</span>", color.to_hex());
        }

        return out;
    }

    /// Tolerant inverse of `render`: unknown tags are skipped, their text
    /// kept. The reported style is the one in effect at the first text
    /// run, or the deepest one opened when the document has no text.
    pub fn parse(markup: &str) -> FormattedText {
        let mut lines: Vec<String> = vec!["".to_string()];
        let mut current = TextStyle::default();
        let mut pending = TextStyle::default();
        let mut style = TextStyle::default();
        let mut saw_text = false;

        let mut rest = markup;
        while !rest.is_empty() {
            if let Some(tag_rest) = rest.strip_prefix('<') {
                if let Some(end) = tag_rest.find('>') {
                    if Markup::apply_tag(&tag_rest[..end], &mut current, &mut lines) {
                        pending = current;
                    }
                    rest = &tag_rest[end + 1..];
                    continue;
                }

                // A stray '<' with no closing '>' reads as text.
                Markup::push_text("<", &mut lines);
                if !saw_text {
                    saw_text = true;
                    style = current;
                }
                rest = tag_rest;
                continue;
            }

            if let Some(entity_rest) = rest.strip_prefix('&') {
                if let Some((decoded, after)) = Markup::decode_entity(entity_rest) {
                    Markup::push_text(decoded, &mut lines);
                    if !saw_text {
                        saw_text = true;
                        style = current;
                    }
                    rest = after;
                    continue;
                }

                Markup::push_text("&", &mut lines);
                if !saw_text {
                    saw_text = true;
                    style = current;
                }
                rest = entity_rest;
                continue;
            }

            let cut = rest
                .find(|ch| return ch == '<' || ch == '&')
                .unwrap_or(rest.len());
            Markup::push_text(&rest[..cut], &mut lines);
            if !saw_text {
                saw_text = true;
                style = current;
            }
            rest = &rest[cut..];
        }

        if !saw_text {
            style = pending;
        }

        return FormattedText { lines, style };
    }

    /// Strips markup down to its raw text, lines joined with newlines.
    pub fn plain_text(markup: &str) -> String {
        return Markup::parse(markup).lines.join("\n");
    }

    fn escape(text: &str) -> String {
        return text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;");
    }

    fn push_text(text: &str, lines: &mut Vec<String>) {
        for (idx, part) in text.split('\n').enumerate() {
            if idx > 0 {
                lines.push("".to_string());
            }
            if let Some(last) = lines.last_mut() {
                last.push_str(part);
            }
        }
    }

    /// Returns whether the tag opened a style, so the caller can remember
    /// the deepest style a text-less document carried.
    fn apply_tag(raw: &str, current: &mut TextStyle, lines: &mut Vec<String>) -> bool {
        let tag = raw.trim().trim_end_matches('/').trim().to_lowercase();
        let closing = tag.starts_with('/');
        let without_slash = tag.trim_start_matches('/');
        let (name, attrs) = match without_slash.split_once(char::is_whitespace) {
            Some((name, attrs)) => (name, attrs),
            None => (without_slash, ""),
        };

        match name {
            "b" | "strong" => current.bold = !closing,
            "i" | "em" => current.italic = !closing,
            "u" => current.underline = !closing,
            "span" | "font" => {
                if closing {
                    current.color = None;
                } else if let Some(color) = Markup::extract_color(attrs) {
                    current.color = Some(color);
                }
            }
            "br" => {
                lines.push("".to_string());
                return false;
            }
            "p" | "div" => {
                let line_down = lines
                    .last()
                    .map(|line| return !line.is_empty())
                    .unwrap_or(false);
                if closing && line_down {
                    lines.push("".to_string());
                }
                return false;
            }
            _ => return false,
        }

        return !closing;
    }

    fn extract_color(attrs: &str) -> Option<Rgb> {
        let idx = attrs.find("color")?;
        let rest = &attrs[idx + "color".len()..];
        let value = rest.trim_start_matches(&[':', '=', ' ', '"', '\''][..]);
        let end = value
            .find(&[';', '"', '\'', ' '][..])
            .unwrap_or(value.len());
        return Rgb::parse_hex(&value[..end]);
    }

    fn decode_entity(rest: &str) -> Option<(&'static str, &str)> {
        let end = rest.find(';')?;
        if end > 6 {
            return None;
        }

        let decoded = match &rest[..end] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "#39" | "apos" => "'",
            "nbsp" => " ",
            _ => return None,
        };

        return Some((decoded, &rest[end + 1..]));
    }
}
