//! Settings Panel

use tracing::debug;

use crate::helpers::Key;
use crate::state::UiState;
use crate::store::Store;

/// Settings panel controller
pub struct SettingsController {
    ui: Store<UiState>,
}

impl SettingsController {
    pub fn new(ui: &Store<UiState>) -> Self {
        Self { ui: ui.clone() }
    }

    /// Escape closes the panel. Returns whether the key was handled.
    pub fn handle_key(&self, key: Key) -> bool {
        if key != Key::Escape {
            return false;
        }
        debug!("Closing panel on escape");
        self.ui.close_panel();
        true
    }
}
