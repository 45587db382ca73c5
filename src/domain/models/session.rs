#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::path;
use std::path::PathBuf;

/// Tracks what the editing surface holds relative to disk. `is_first_save`
/// is true exactly when no destination path has been established, so a
/// plain save must still ask where to write.
pub struct EditorSession {
    is_saved: bool,
    is_first_save: bool,
    file_path: Option<PathBuf>,
}

impl Default for EditorSession {
    fn default() -> EditorSession {
        return EditorSession {
            is_saved: true,
            is_first_save: true,
            file_path: None,
        };
    }
}

impl EditorSession {
    pub fn is_saved(&self) -> bool {
        return self.is_saved;
    }

    pub fn is_first_save(&self) -> bool {
        return self.is_first_save;
    }

    pub fn file_path(&self) -> Option<&path::Path> {
        return self.file_path.as_deref();
    }

    /// Repeated edits while already unsaved are no-ops in effect.
    pub fn mark_edited(&mut self) {
        self.is_saved = false;
    }

    pub fn mark_saved_to(&mut self, file_path: PathBuf) {
        self.is_saved = true;
        self.is_first_save = false;
        self.file_path = Some(file_path);
    }

    pub fn mark_loaded_from(&mut self, file_path: PathBuf) {
        self.is_saved = true;
        self.is_first_save = false;
        self.file_path = Some(file_path);
    }

    /// Back to a pristine, never-saved document.
    pub fn reset(&mut self) {
        self.is_saved = true;
        self.is_first_save = true;
        self.file_path = None;
    }

    pub fn display_name(&self) -> String {
        if let Some(file_path) = &self.file_path {
            if let Some(name) = file_path.file_name() {
                return name.to_string_lossy().to_string();
            }
        }

        return "untitled".to_string();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    Cancelled,
    Aborted(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseDecision {
    Close,
    Stay,
}
