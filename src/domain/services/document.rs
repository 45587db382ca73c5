#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::models::CloseDecision;
use crate::domain::models::ConfirmPrompt;
use crate::domain::models::Dialogs;
use crate::domain::models::EditingSurface;
use crate::domain::models::EditorSession;
use crate::domain::models::FlowOutcome;
use crate::domain::models::FormattedClipboard;
use crate::domain::models::PathSelector;
use crate::domain::models::PromptChoice;
use crate::domain::models::SaveOutcome;
use crate::domain::models::StoreBox;

/// Mediates every user action that could lose unsaved work. Owns the
/// session state; the widgets, dialogs, clipboard, and disk stay behind
/// their ports.
///
/// When the user answers Yes to a save prompt and that save then fails or
/// is cancelled, the destructive action is aborted rather than carried
/// out on top of the failure.
pub struct DocumentService {
    session: EditorSession,
    store: StoreBox,
}

impl DocumentService {
    pub fn new(store: StoreBox) -> DocumentService {
        return DocumentService {
            session: EditorSession::default(),
            store,
        };
    }

    pub fn session(&self) -> &EditorSession {
        return &self.session;
    }

    /// Called for every content-modifying notification from the editing
    /// surface.
    pub fn on_content_changed(&mut self) {
        self.session.mark_edited();
    }

    pub async fn request_new(
        &mut self,
        surface: &mut dyn EditingSurface,
        dialogs: &mut dyn Dialogs,
    ) -> Result<FlowOutcome> {
        if !self.session.is_saved() {
            match dialogs
                .ask("New File", "Save changes to the current file?")
                .await?
            {
                PromptChoice::Yes => {
                    match self.save(&surface.export_markup(), dialogs).await? {
                        SaveOutcome::Saved(_) => {}
                        SaveOutcome::Cancelled => return Ok(FlowOutcome::Cancelled),
                        SaveOutcome::Failed(reason) => return Ok(FlowOutcome::Aborted(reason)),
                    }
                }
                PromptChoice::No => {}
                PromptChoice::Cancel => return Ok(FlowOutcome::Cancelled),
            }
        }

        surface.clear();
        self.session.reset();
        tracing::debug!("reset to an empty document");

        return Ok(FlowOutcome::Completed);
    }

    pub async fn request_open(
        &mut self,
        surface: &mut dyn EditingSurface,
        dialogs: &mut dyn Dialogs,
    ) -> Result<FlowOutcome> {
        if !self.session.is_saved() {
            match dialogs
                .ask("Open File", "Save changes to the current file?")
                .await?
            {
                PromptChoice::Yes => {
                    match self.save(&surface.export_markup(), dialogs).await? {
                        SaveOutcome::Saved(_) => {}
                        SaveOutcome::Cancelled => return Ok(FlowOutcome::Cancelled),
                        SaveOutcome::Failed(reason) => return Ok(FlowOutcome::Aborted(reason)),
                    }
                }
                PromptChoice::No => {}
                PromptChoice::Cancel => return Ok(FlowOutcome::Cancelled),
            }
        }

        let path = match dialogs.open_path().await? {
            Some(path) => path,
            None => return Ok(FlowOutcome::Cancelled),
        };

        return Ok(self.open_from(path, surface).await);
    }

    /// Loads `path` into the surface, bypassing the selector. Also used
    /// for files named on the command line. A failed read leaves the
    /// session untouched.
    pub async fn open_from(
        &mut self,
        path: PathBuf,
        surface: &mut dyn EditingSurface,
    ) -> FlowOutcome {
        let markup = match self.store.read(&path).await {
            Ok(markup) => markup,
            Err(err) => {
                tracing::error!(path = %path.display(), err = ?err, "read failed");
                return FlowOutcome::Aborted(format!("Could not open {}: {err}", path.display()));
            }
        };

        surface.load_markup(&markup);
        self.session.mark_loaded_from(path);

        return FlowOutcome::Completed;
    }

    /// First saves prompt for a destination exactly like save-as.
    pub async fn save(&mut self, snapshot: &str, dialogs: &mut dyn Dialogs) -> Result<SaveOutcome> {
        if !self.session.is_first_save() {
            if let Some(path) = self.session.file_path() {
                let path = path.to_path_buf();
                return Ok(self.persist(path, snapshot).await);
            }
        }

        return self.save_as(snapshot, dialogs).await;
    }

    pub async fn save_as(
        &mut self,
        snapshot: &str,
        dialogs: &mut dyn Dialogs,
    ) -> Result<SaveOutcome> {
        let path = match dialogs.save_path().await? {
            Some(path) => path,
            None => return Ok(SaveOutcome::Cancelled),
        };

        return Ok(self.persist(path, snapshot).await);
    }

    pub async fn request_close(
        &mut self,
        surface: &mut dyn EditingSurface,
        dialogs: &mut dyn Dialogs,
    ) -> Result<CloseDecision> {
        if self.session.is_saved() {
            return Ok(CloseDecision::Close);
        }

        match dialogs
            .ask("Quit", "Save the current file before quitting?")
            .await?
        {
            PromptChoice::Yes => match self.save(&surface.export_markup(), dialogs).await? {
                SaveOutcome::Saved(_) => return Ok(CloseDecision::Close),
                SaveOutcome::Cancelled | SaveOutcome::Failed(_) => {
                    return Ok(CloseDecision::Stay)
                }
            },
            PromptChoice::No => return Ok(CloseDecision::Close),
            PromptChoice::Cancel => return Ok(CloseDecision::Stay),
        }
    }

    /// Returns whether a selection was placed on the clipboard.
    pub fn copy_selection(
        &self,
        surface: &dyn EditingSurface,
        clipboard: &mut dyn FormattedClipboard,
    ) -> Result<bool> {
        let markup = match surface.selection_markup() {
            Some(markup) => markup,
            None => return Ok(false),
        };

        clipboard.set_markup(&markup)?;
        return Ok(true);
    }

    /// Copy, then delete the selection. The deletion runs through the
    /// normal edit notification.
    pub fn cut_selection(
        &mut self,
        surface: &mut dyn EditingSurface,
        clipboard: &mut dyn FormattedClipboard,
    ) -> Result<bool> {
        let markup = match surface.selection_markup() {
            Some(markup) => markup,
            None => return Ok(false),
        };

        clipboard.set_markup(&markup)?;
        if surface.remove_selection() {
            self.on_content_changed();
        }

        return Ok(true);
    }

    /// Inserts the clipboard's formatted payload at the cursor, a no-op
    /// when it holds none.
    pub fn paste_clipboard(
        &mut self,
        surface: &mut dyn EditingSurface,
        clipboard: &mut dyn FormattedClipboard,
    ) -> Result<bool> {
        let payload = match clipboard.markup()? {
            Some(payload) => payload,
            None => return Ok(false),
        };

        surface.insert_markup(&payload);
        self.on_content_changed();

        return Ok(true);
    }

    async fn persist(&mut self, path: PathBuf, snapshot: &str) -> SaveOutcome {
        if let Err(err) = self.store.write(&path, snapshot).await {
            tracing::error!(path = %path.display(), err = ?err, "write failed");
            return SaveOutcome::Failed(format!("Could not save {}: {err}", path.display()));
        }

        self.session.mark_saved_to(path.clone());
        tracing::info!(path = %path.display(), "document saved");

        return SaveOutcome::Saved(path);
    }
}
