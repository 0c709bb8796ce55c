//! MocksState - Mocks Panel State
//!
//! Sidebar selection, group expansion and in-flight recaptures.

use serde::Serialize;

use crate::store::{Store, state_delta};

/// A selectable sidebar item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum ItemRef {
    Mock(String),
    Group(String),
}

impl ItemRef {
    pub fn id(&self) -> &str {
        match self {
            ItemRef::Mock(id) | ItemRef::Group(id) => id,
        }
    }
}

/// Sidebar presentation of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub id: String,
    pub is_open: bool,
    /// Open state before the last collapse/expand-all
    pub last_state: Option<bool>,
}

impl GroupView {
    /// A collapsed group with no history
    pub fn closed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_open: false,
            last_state: None,
        }
    }
}

/// State for the mocks panel
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MocksState {
    pub selected_items: Vec<ItemRef>,
    pub groups: Vec<GroupView>,
    /// Mocks whose request is currently being re-recorded
    pub recapture_request_ids: Vec<String>,
}

state_delta! {
    /// Partial update of [`MocksState`]
    pub struct MocksDelta for MocksState {
        selected_items: Vec<ItemRef>,
        groups: Vec<GroupView>,
        recapture_request_ids: Vec<String>,
    }
}

impl MocksState {
    pub fn group(&self, id: &str) -> Option<&GroupView> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_items.iter().any(|item| item.id() == id)
    }

    pub fn is_recapturing(&self, mock_id: &str) -> bool {
        self.recapture_request_ids.iter().any(|id| id == mock_id)
    }
}

// Each helper derives the new field value from the current one, then
// replaces the whole field through `update`.
impl Store<MocksState> {
    /// Replace the selection
    pub fn select_items(&self, items: Vec<ItemRef>) {
        self.update(MocksDelta::default().selected_items(items));
    }

    /// Register a group, replacing any entry with the same id
    pub fn add_group(&self, group: GroupView) {
        let mut groups = self.with(|s| s.groups.clone());
        match groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => *existing = group,
            None => groups.push(group),
        }
        self.update(MocksDelta::default().groups(groups));
    }

    /// Drop items from the selection and their group entries
    pub fn remove_items(&self, ids: &[String]) {
        let (selected_items, groups) = self.with(|s| {
            let selected: Vec<ItemRef> = s
                .selected_items
                .iter()
                .filter(|item| !ids.iter().any(|id| id == item.id()))
                .cloned()
                .collect();
            let groups: Vec<GroupView> = s
                .groups
                .iter()
                .filter(|g| !ids.contains(&g.id))
                .cloned()
                .collect();
            (selected, groups)
        });
        self.update(MocksDelta::default().selected_items(selected_items).groups(groups));
    }

    /// Open or close one group. Unknown ids are ignored.
    pub fn toggle_group(&self, id: &str) {
        let mut groups = self.with(|s| s.groups.clone());
        let Some(group) = groups.iter_mut().find(|g| g.id == id) else {
            return;
        };
        group.is_open = !group.is_open;
        self.update(MocksDelta::default().groups(groups));
    }

    pub fn collapse_all_groups(&self) {
        self.set_all_groups_open(false);
    }

    pub fn expand_all_groups(&self) {
        self.set_all_groups_open(true);
    }

    fn set_all_groups_open(&self, open: bool) {
        let groups = self.with(|s| {
            s.groups
                .iter()
                .map(|g| GroupView {
                    id: g.id.clone(),
                    is_open: open,
                    last_state: Some(g.is_open),
                })
                .collect::<Vec<_>>()
        });
        self.update(MocksDelta::default().groups(groups));
    }

    /// Mark a mock as being re-recorded
    pub fn start_recapture(&self, mock_id: &str) {
        if self.with(|s| s.is_recapturing(mock_id)) {
            return;
        }
        let mut ids = self.with(|s| s.recapture_request_ids.clone());
        ids.push(mock_id.to_string());
        self.update(MocksDelta::default().recapture_request_ids(ids));
    }

    /// Clear the recapture mark for a mock
    pub fn finish_recapture(&self, mock_id: &str) {
        let ids = self.with(|s| {
            s.recapture_request_ids
                .iter()
                .filter(|id| *id != mock_id)
                .cloned()
                .collect::<Vec<_>>()
        });
        self.update(MocksDelta::default().recapture_request_ids(ids));
    }
}
