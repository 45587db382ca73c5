/// The text widget as the session controller sees it: an opaque holder of
/// formatted content. The controller never inspects what is inside, it
/// only moves serialized markup in and out.
pub trait EditingSurface {
    /// Serializes the whole document, style included.
    fn export_markup(&self) -> String;

    /// Replaces the document with the rendered form of `markup`.
    fn load_markup(&mut self, markup: &str);

    /// Empties the document and drops any styling.
    fn clear(&mut self);

    /// Serialized form of the current selection, `None` when nothing is
    /// selected.
    fn selection_markup(&self) -> Option<String>;

    /// Deletes the selected text. Returns whether anything was removed.
    fn remove_selection(&mut self) -> bool;

    /// Inserts the text content of `markup` at the cursor.
    fn insert_markup(&mut self, markup: &str);
}
