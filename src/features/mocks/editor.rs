//! Mock Editor
//!
//! Option lists, tab selection and edit handlers for the selected mock.
//! Edits are deep-merged into a copy of the mock, sent to the API, and the
//! merged mock replaces its entry in `UiState::selected_mocks`.

use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::debug;

use crate::app::AppStores;
use crate::domain::{CONTENT_TYPE, ContentKind, HttpMethod, Mock, MockPatch, ResponsePatch};
use crate::error::Result;
use crate::helpers::convert_delay_to_seconds;
use crate::services::MockApi;
use crate::state::UiDelta;

/// Preset delays in milliseconds
pub const DELAY_PRESETS: [u64; 6] = [500, 1000, 2000, 5000, 10000, 15000];

/// Status codes always offered
pub const STATUS_PRESETS: [u16; 4] = [200, 201, 401, 500];

/// One entry of the delay dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayOption {
    pub value: u64,
    pub label: String,
}

/// Delay choices; a non-preset `current` delay is appended
pub fn delay_options(current: u64) -> Vec<DelayOption> {
    let mut options: Vec<DelayOption> = DELAY_PRESETS
        .iter()
        .map(|&value| DelayOption {
            value,
            label: convert_delay_to_seconds(value),
        })
        .collect();

    if !DELAY_PRESETS.contains(&current) {
        options.push(DelayOption {
            value: current,
            label: convert_delay_to_seconds(current),
        });
    }
    options
}

/// Sorted, de-duplicated status choices including `current` (0 is skipped)
pub fn status_options(current: u16) -> Vec<u16> {
    let mut options = STATUS_PRESETS.to_vec();
    if current != 0 {
        options.push(current);
    }
    options.sort_unstable();
    options.dedup();
    options
}

/// Editor content tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTab {
    RequestBody,
    ResponseHeaders,
    ResponseBody,
}

impl EditorTab {
    pub fn label(&self) -> &'static str {
        match self {
            EditorTab::RequestBody => "request body",
            EditorTab::ResponseHeaders => "response headers",
            EditorTab::ResponseBody => "response body",
        }
    }
}

/// Tabs shown for a method; the request body tab only when it has one
pub fn tabs_for(method: HttpMethod) -> Vec<EditorTab> {
    let mut tabs = Vec::with_capacity(3);
    if method.has_request_body() {
        tabs.push(EditorTab::RequestBody);
    }
    tabs.extend([EditorTab::ResponseHeaders, EditorTab::ResponseBody]);
    tabs
}

/// Local tab selection of one editor instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTabs {
    mock_id: Option<String>,
    selected: EditorTab,
}

impl Default for EditorTabs {
    fn default() -> Self {
        Self {
            mock_id: None,
            selected: EditorTab::ResponseBody,
        }
    }
}

impl EditorTabs {
    pub fn selected(&self) -> EditorTab {
        self.selected
    }

    pub fn select(&mut self, tab: EditorTab) {
        self.selected = tab;
    }

    /// Track the mock being edited; switching mocks resets to the body tab
    pub fn sync_mock(&mut self, mock_id: Option<&str>) {
        if self.mock_id.as_deref() != mock_id {
            self.mock_id = mock_id.map(str::to_string);
            self.selected = EditorTab::ResponseBody;
        }
    }

    /// A method without a request body cannot stay on the request body tab
    pub fn on_method_change(&mut self, method: HttpMethod) {
        if !method.has_request_body() {
            self.selected = EditorTab::ResponseBody;
        }
    }
}

/// Mock editor controller
pub struct EditorController<A: MockApi> {
    api: Rc<A>,
    stores: AppStores,
}

impl<A: MockApi> EditorController<A> {
    /// Create a new controller
    pub fn new(api: Rc<A>, stores: AppStores) -> Self {
        Self { api, stores }
    }

    /// Whether the editor should show the recapture spinner instead
    pub fn is_recapturing(&self, mock_id: &str) -> bool {
        self.stores.mocks.with(|s| s.is_recapturing(mock_id))
    }

    /// Merge `patch` into `selected`, save it, and publish the result
    pub fn update_mock(&self, selected: &Mock, patch: MockPatch) -> Result<Mock> {
        let mock = selected.patched(patch);
        self.api.update_mock(&selected.id, mock.clone())?;
        debug!(id = %mock.id, "Mock updated");

        let selected_mocks = self.stores.ui.with(|s| {
            s.selected_mocks
                .iter()
                .map(|m| if m.id == mock.id { mock.clone() } else { m.clone() })
                .collect::<Vec<_>>()
        });
        self.stores
            .ui
            .update(UiDelta::default().selected_mocks(selected_mocks));
        Ok(mock)
    }

    /// Code editor change on the given tab
    pub fn set_body(&self, selected: &Mock, tab: EditorTab, value: String) -> Result<Mock> {
        let patch = match tab {
            EditorTab::RequestBody => MockPatch {
                params: Some(value),
                ..MockPatch::default()
            },
            EditorTab::ResponseBody | EditorTab::ResponseHeaders => {
                MockPatch::response(ResponsePatch {
                    body: Some(value),
                    ..ResponsePatch::default()
                })
            }
        };
        self.update_mock(selected, patch)
    }

    /// URL input blur; surrounding whitespace is dropped
    pub fn set_url(&self, selected: &Mock, raw: &str) -> Result<Mock> {
        self.update_mock(
            selected,
            MockPatch {
                url: Some(raw.trim().to_string()),
                ..MockPatch::default()
            },
        )
    }

    pub fn set_method(
        &self,
        selected: &Mock,
        method: HttpMethod,
        tabs: &mut EditorTabs,
    ) -> Result<Mock> {
        let mock = self.update_mock(
            selected,
            MockPatch {
                method: Some(method),
                ..MockPatch::default()
            },
        )?;
        tabs.on_method_change(method);
        Ok(mock)
    }

    pub fn set_status(&self, selected: &Mock, status: u16) -> Result<Mock> {
        self.update_mock(
            selected,
            MockPatch::response(ResponsePatch {
                status: Some(status),
                ..ResponsePatch::default()
            }),
        )
    }

    /// Content type choice; other response headers are kept
    pub fn set_content_kind(&self, selected: &Mock, kind: ContentKind) -> Result<Mock> {
        let headers = BTreeMap::from([(CONTENT_TYPE.to_string(), kind.mime().to_string())]);
        self.update_mock(
            selected,
            MockPatch::response(ResponsePatch {
                headers: Some(headers),
                ..ResponsePatch::default()
            }),
        )
    }

    pub fn set_delay(&self, selected: &Mock, delay: u64) -> Result<Mock> {
        self.update_mock(
            selected,
            MockPatch::response(ResponsePatch {
                delay: Some(delay),
                ..ResponsePatch::default()
            }),
        )
    }
}
