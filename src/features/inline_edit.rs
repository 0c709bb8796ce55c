//! Inline Edit
//!
//! Rename-in-place for sidebar items. At most one item is being renamed at
//! a time: the one whose id is in `UiState::sidebar_rename_item_id`.

use crate::helpers::Key;
use crate::state::{UiDelta, UiState};
use crate::store::Store;

/// Result of a key press while editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEditOutcome {
    /// Enter: commit the typed value
    Save(String),
    /// Escape: discard
    Cancel,
    /// Not editing, or a key without meaning here
    Ignored,
}

/// Rename state for one sidebar item
#[derive(Debug, Clone)]
pub struct InlineEdit {
    id: String,
    store: Store<UiState>,
}

impl InlineEdit {
    pub fn new(id: impl Into<String>, store: &Store<UiState>) -> Self {
        Self {
            id: id.into(),
            store: store.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_editing(&self) -> bool {
        self.store
            .with(|s| s.sidebar_rename_item_id.as_deref() == Some(self.id.as_str()))
    }

    /// Start renaming this item, or stop if it already is
    pub fn toggle_editing(&self) {
        let rename_id = if self.is_editing() {
            None
        } else {
            Some(self.id.clone())
        };
        self.store
            .update(UiDelta::default().sidebar_rename_item_id(rename_id));
    }

    /// Handle a key press with the input's current `value`
    pub fn handle_key(&self, key: Key, value: &str) -> InlineEditOutcome {
        if !self.is_editing() {
            return InlineEditOutcome::Ignored;
        }

        match key {
            Key::Enter => {
                self.toggle_editing();
                InlineEditOutcome::Save(value.to_string())
            }
            Key::Escape => {
                self.toggle_editing();
                InlineEditOutcome::Cancel
            }
            Key::Other => InlineEditOutcome::Ignored,
        }
    }
}
