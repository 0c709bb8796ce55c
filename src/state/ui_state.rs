//! UiState - General UI State
//!
//! Panel visibility, sizes, search and selection shared by the whole UI.

use serde::Serialize;

use crate::domain::{ApiMode, AppConfig, LoggedRequest, Mock};
use crate::store::{Store, state_delta};

/// Which panel is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Closed,
    Mocks,
    Requests,
    Settings,
}

/// Editor panel height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorHeight {
    /// Fill the window
    Full,
    Pixels(u32),
}

/// State for the general UI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    /// Whether mocking is active
    pub mimic_enabled: bool,
    pub view_mode: ViewMode,
    pub selected_request_id: Option<String>,
    pub latest_request: Option<LoggedRequest>,
    pub editor_height: EditorHeight,
    pub mocks_sidebar_width: u32,
    pub search_term: String,
    pub selected_mocks: Vec<Mock>,
    pub selected_group: Option<String>,
    /// Sidebar item currently being renamed in place
    pub sidebar_rename_item_id: Option<String>,
}

state_delta! {
    /// Partial update of [`UiState`]
    pub struct UiDelta for UiState {
        mimic_enabled: bool,
        view_mode: ViewMode,
        selected_request_id: Option<String>,
        latest_request: Option<LoggedRequest>,
        editor_height: EditorHeight,
        mocks_sidebar_width: u32,
        search_term: String,
        selected_mocks: Vec<Mock>,
        selected_group: Option<String>,
        sidebar_rename_item_id: Option<String>,
    }
}

impl UiState {
    /// Initial state for the configured API mode and panel sizes
    pub fn from_config(config: &AppConfig) -> Self {
        let editor_height = match config.api_mode {
            ApiMode::Remote => EditorHeight::Full,
            ApiMode::Local => EditorHeight::Pixels(config.ui.editor_height),
        };

        Self {
            mimic_enabled: true,
            view_mode: ViewMode::Closed,
            selected_request_id: None,
            latest_request: None,
            editor_height,
            mocks_sidebar_width: config.ui.mocks_sidebar_width,
            search_term: String::new(),
            selected_mocks: Vec::new(),
            selected_group: None,
            sidebar_rename_item_id: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.view_mode != ViewMode::Closed
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Store<UiState> {
    /// Close whichever panel is open
    pub fn close_panel(&self) {
        self.update(UiDelta::default().view_mode(ViewMode::Closed));
    }

    /// Open a panel
    pub fn open_view(&self, mode: ViewMode) {
        self.update(UiDelta::default().view_mode(mode));
    }

    /// Flip mocking on or off
    pub fn toggle_mimic(&self) {
        let enabled = self.with(|s| s.mimic_enabled);
        self.update(UiDelta::default().mimic_enabled(!enabled));
    }
}
