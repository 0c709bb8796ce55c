//! Mocks Controller
//!
//! Sidebar toolbar actions: create, delete, record, collapse and expand.

use std::rc::Rc;
use tracing::{info, warn};

use crate::app::AppStores;
use crate::error::Result;
use crate::services::MockApi;
use crate::state::{GroupView, ItemRef, UiDelta};

/// Default name for groups created from the toolbar
pub const NEW_GROUP_NAME: &str = "New Group";

/// What the toolbar's add menu creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewItemKind {
    Mock,
    Group,
}

/// Mocks sidebar controller
pub struct MocksController<A: MockApi> {
    api: Rc<A>,
    stores: AppStores,
}

impl<A: MockApi> MocksController<A> {
    /// Create a new controller
    pub fn new(api: Rc<A>, stores: AppStores) -> Self {
        Self { api, stores }
    }

    /// Create a mock or group and select it
    pub fn add_new(&self, kind: NewItemKind) {
        match kind {
            NewItemKind::Mock => {
                let mock = self.api.add_mock();
                info!(id = %mock.id, "Created mock");
                self.stores
                    .mocks
                    .select_items(vec![ItemRef::Mock(mock.id.clone())]);
                self.stores
                    .ui
                    .update(UiDelta::default().selected_mocks(vec![mock]));
            }
            NewItemKind::Group => {
                let group = self.api.add_group(NEW_GROUP_NAME);
                info!(id = %group.id, "Created group");
                self.stores.mocks.add_group(GroupView::closed(group.id.clone()));
                self.stores.mocks.select_items(vec![ItemRef::Group(group.id)]);
            }
        }
    }

    /// Start or stop recording traffic
    pub fn toggle_recording(&self) {
        if self.api.is_recording() {
            self.api.stop_recording();
        } else {
            self.api.start_recording();
        }
    }

    /// Delete every selected mock and group.
    ///
    /// Items deleted before a failure are still removed from the stores.
    pub fn delete_selected(&self) -> Result<()> {
        let selected = self.stores.mocks.with(|s| s.selected_items.clone());
        let mut removed = Vec::with_capacity(selected.len());
        let mut outcome = Ok(());

        for item in &selected {
            let result = match item {
                ItemRef::Mock(id) => self.api.remove_mock(id),
                ItemRef::Group(id) => self.api.remove_group(id),
            };
            match result {
                Ok(()) => removed.push(item.id().to_string()),
                Err(e) => {
                    warn!(error = %e, id = item.id(), "Failed to delete item");
                    outcome = Err(e);
                    break;
                }
            }
        }

        if !removed.is_empty() {
            self.stores.mocks.remove_items(&removed);
            let selected_mocks = self.stores.ui.with(|s| {
                s.selected_mocks
                    .iter()
                    .filter(|m| !removed.contains(&m.id))
                    .cloned()
                    .collect::<Vec<_>>()
            });
            self.stores
                .ui
                .update(UiDelta::default().selected_mocks(selected_mocks));
            info!(count = removed.len(), "Deleted selected items");
        }

        outcome
    }

    pub fn collapse_all(&self) {
        self.stores.mocks.collapse_all_groups();
    }

    pub fn expand_all(&self) {
        self.stores.mocks.expand_all_groups();
    }

    /// Collapse/expand-all are only meaningful with groups present
    pub fn can_toggle_groups(&self) -> bool {
        !self.api.groups().is_empty()
    }

    /// Delete needs a selection
    pub fn can_delete(&self) -> bool {
        self.stores.mocks.with(|s| !s.selected_items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryApi;

    fn controller() -> (Rc<InMemoryApi>, AppStores, MocksController<InMemoryApi>) {
        let api = Rc::new(InMemoryApi::default());
        let stores = AppStores::default();
        let controller = MocksController::new(Rc::clone(&api), stores.clone());
        (api, stores, controller)
    }

    #[test]
    fn add_mock_selects_it() {
        let (api, stores, controller) = controller();
        controller.add_new(NewItemKind::Mock);

        let id = api.mocks()[0].id.clone();
        assert_eq!(
            stores.mocks.with(|s| s.selected_items.clone()),
            vec![ItemRef::Mock(id.clone())]
        );
        assert_eq!(stores.ui.with(|s| s.selected_mocks[0].id.clone()), id);
        assert!(controller.can_delete());
    }

    #[test]
    fn add_group_registers_closed_view() {
        let (api, stores, controller) = controller();
        assert!(!controller.can_toggle_groups());
        controller.add_new(NewItemKind::Group);

        let group = api.groups()[0].clone();
        assert_eq!(group.name, NEW_GROUP_NAME);
        assert_eq!(
            stores.mocks.with(|s| s.group(&group.id).cloned()),
            Some(GroupView::closed(group.id.clone()))
        );
        assert!(stores.mocks.with(|s| s.is_selected(&group.id)));
        assert!(controller.can_toggle_groups());
    }

    #[test]
    fn delete_selected_clears_api_and_stores() {
        let (api, stores, controller) = controller();
        controller.add_new(NewItemKind::Mock);
        controller.delete_selected().expect("delete");

        assert!(api.mocks().is_empty());
        assert!(stores.mocks.with(|s| s.selected_items.is_empty()));
        assert!(stores.ui.with(|s| s.selected_mocks.is_empty()));
    }

    #[test]
    fn delete_selected_keeps_progress_on_failure() {
        let (api, stores, controller) = controller();
        let mock = api.add_mock();
        stores.mocks.select_items(vec![
            ItemRef::Mock(mock.id.clone()),
            ItemRef::Mock("missing".to_string()),
        ]);

        assert!(controller.delete_selected().is_err());
        assert!(api.mocks().is_empty());
        assert_eq!(
            stores.mocks.with(|s| s.selected_items.clone()),
            vec![ItemRef::Mock("missing".to_string())]
        );
    }

    #[test]
    fn toggle_recording_flips() {
        let (api, _stores, controller) = controller();
        controller.toggle_recording();
        assert!(api.is_recording());
        controller.toggle_recording();
        assert!(!api.is_recording());
    }
}
