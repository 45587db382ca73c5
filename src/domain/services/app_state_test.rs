use std::path::PathBuf;

use super::AppState;
use crate::domain::models::FlowOutcome;
use crate::domain::models::SaveOutcome;
use crate::infrastructure::storage::DiskStore;

fn app_state() -> AppState {
    return AppState::new(Box::<DiskStore>::default());
}

#[test]
fn it_starts_ready_to_compose() {
    let app_state = app_state();

    assert_eq!(app_state.status, "Ready to Compose");
    assert_eq!(app_state.title(), " jotter - untitled");
}

#[test]
fn it_marks_unsaved_documents_in_the_title() {
    let mut app_state = app_state();

    app_state.document.on_content_changed();

    assert_eq!(app_state.title(), " jotter - untitled*");
}

#[test]
fn it_reports_save_outcomes() {
    let mut app_state = app_state();

    app_state.report_save(SaveOutcome::Saved(PathBuf::from("/notes/a.html")));
    assert_eq!(app_state.status, "Saved /notes/a.html");

    app_state.report_save(SaveOutcome::Cancelled);
    assert_eq!(app_state.status, "Save cancelled");

    app_state.report_save(SaveOutcome::Failed("Could not save a.html: denied".to_string()));
    assert_eq!(app_state.status, "Could not save a.html: denied");
}

#[test]
fn it_reports_flow_outcomes() {
    let mut app_state = app_state();

    app_state.report_flow(FlowOutcome::Completed, "New document");
    assert_eq!(app_state.status, "New document");

    app_state.report_flow(FlowOutcome::Cancelled, "New document");
    assert_eq!(app_state.status, "Cancelled");

    app_state.report_flow(
        FlowOutcome::Aborted("Could not open b.html: gone".to_string()),
        "Opened b.html",
    );
    assert_eq!(app_state.status, "Could not open b.html: gone");
}
