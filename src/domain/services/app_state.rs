#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::DocumentService;
use crate::domain::models::FlowOutcome;
use crate::domain::models::SaveOutcome;
use crate::domain::models::StoreBox;
use crate::infrastructure::surfaces::TextAreaSurface;

const KEY_HINTS: &str = "^N new  ^O open  ^S save  M-S save as  ^X cut  ^C copy  ^V paste  M-K color  M-E emphasis  F1 about  ^Q quit";

pub struct AppState {
    pub surface: TextAreaSurface,
    pub document: DocumentService,
    pub status: String,
}

impl AppState {
    pub fn new(store: StoreBox) -> AppState {
        return AppState {
            surface: TextAreaSurface::new(),
            document: DocumentService::new(store),
            status: "Ready to Compose".to_string(),
        };
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn title(&self) -> String {
        let mut title = format!(" jotter - {}", self.document.session().display_name());
        if !self.document.session().is_saved() {
            title.push('*');
        }

        return title;
    }

    pub fn report_flow(&mut self, outcome: FlowOutcome, done: &str) {
        match outcome {
            FlowOutcome::Completed => self.set_status(done),
            FlowOutcome::Cancelled => self.set_status("Cancelled"),
            FlowOutcome::Aborted(reason) => self.set_status(&reason),
        }
    }

    pub fn report_save(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Saved(path) => self.set_status(&format!("Saved {}", path.display())),
            SaveOutcome::Cancelled => self.set_status("Save cancelled"),
            SaveOutcome::Failed(reason) => self.set_status(&reason),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Max(1),
                Constraint::Min(1),
                Constraint::Max(1),
                Constraint::Max(1),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(self.title())
                .style(Style::default().add_modifier(Modifier::REVERSED)),
            layout[0],
        );
        frame.render_widget(&self.surface.textarea, layout[1]);
        frame.render_widget(Paragraph::new(self.status.as_str()), layout[2]);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(Style::default().add_modifier(Modifier::DIM)),
            layout[3],
        );
    }
}
