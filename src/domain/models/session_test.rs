use std::path::PathBuf;

use super::EditorSession;

#[test]
fn it_starts_pristine() {
    let session = EditorSession::default();

    assert!(session.is_saved());
    assert!(session.is_first_save());
    assert!(session.file_path().is_none());
    assert_eq!(session.display_name(), "untitled");
}

#[test]
fn it_stays_dirty_across_repeated_edits() {
    let mut session = EditorSession::default();

    session.mark_edited();
    session.mark_edited();

    assert!(!session.is_saved());
    assert!(session.is_first_save());
}

#[test]
fn it_records_saves() {
    let mut session = EditorSession::default();
    session.mark_edited();

    session.mark_saved_to(PathBuf::from("/notes/todo.html"));

    assert!(session.is_saved());
    assert!(!session.is_first_save());
    assert_eq!(session.file_path().unwrap(), PathBuf::from("/notes/todo.html"));
    assert_eq!(session.display_name(), "todo.html");
}

#[test]
fn it_records_loads() {
    let mut session = EditorSession::default();
    session.mark_edited();

    session.mark_loaded_from(PathBuf::from("journal.txt"));

    assert!(session.is_saved());
    assert!(!session.is_first_save());
    assert_eq!(session.display_name(), "journal.txt");
}

#[test]
fn it_resets_to_a_never_saved_document() {
    let mut session = EditorSession::default();
    session.mark_saved_to(PathBuf::from("old.html"));
    session.mark_edited();

    session.reset();

    assert!(session.is_saved());
    assert!(session.is_first_save());
    assert!(session.file_path().is_none());
}

#[test]
fn it_ties_first_save_to_a_missing_path() {
    let mut session = EditorSession::default();
    assert_eq!(session.is_first_save(), session.file_path().is_none());

    session.mark_saved_to(PathBuf::from("a.txt"));
    assert_eq!(session.is_first_save(), session.file_path().is_none());

    session.reset();
    assert_eq!(session.is_first_save(), session.file_path().is_none());
}
