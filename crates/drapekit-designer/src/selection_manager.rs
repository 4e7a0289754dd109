use drapekit_core::ObjectId;

/// Tracks the single selected garment.
///
/// # Selection Model
///
/// - At most one garment is selected at a time; its handle is the only one
///   shown.
/// - Selecting never touches stacking order.
/// - Every mutator reports whether the selection actually changed so callers
///   notify listeners only on real transitions.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ObjectId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use drapekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected garment, if any.
    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected_id
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected_id == Some(id)
    }

    /// Selects `id`.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn select(&mut self, id: ObjectId) -> bool {
        if self.is_selected(id) {
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected_id.take().is_some()
    }

    /// Clears the selection only if `id` is the selected garment.
    pub fn deselect(&mut self, id: ObjectId) -> bool {
        if self.is_selected(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }
}
