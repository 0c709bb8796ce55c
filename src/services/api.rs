//! Mock API
//!
//! The boundary to the mock server's API. Controllers call it, then push the
//! results into the stores with `update`.

use std::cell::{Cell, RefCell};
use tracing::{debug, info};

use crate::domain::{ApiMode, Group, Mock};
use crate::error::{Error, Result};

/// Operations the UI needs from the mock server
pub trait MockApi {
    /// Where the server runs
    fn mode(&self) -> ApiMode;

    /// All mocks
    fn mocks(&self) -> Vec<Mock>;

    /// All groups
    fn groups(&self) -> Vec<Group>;

    /// Create a mock with default values
    fn add_mock(&self) -> Mock;

    /// Create a named group
    fn add_group(&self, name: &str) -> Group;

    /// Replace the stored mock with `mock`
    fn update_mock(&self, id: &str, mock: Mock) -> Result<()>;

    fn remove_mock(&self, id: &str) -> Result<()>;

    /// Remove a group. Its mocks are kept, ungrouped.
    fn remove_group(&self, id: &str) -> Result<()>;

    fn is_recording(&self) -> bool;

    fn start_recording(&self);

    fn stop_recording(&self);
}

/// In-process API keeping everything in memory
#[derive(Debug, Default)]
pub struct InMemoryApi {
    mode: ApiMode,
    mocks: RefCell<Vec<Mock>>,
    groups: RefCell<Vec<Group>>,
    recording: Cell<bool>,
}

impl InMemoryApi {
    pub fn new(mode: ApiMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl MockApi for InMemoryApi {
    fn mode(&self) -> ApiMode {
        self.mode
    }

    fn mocks(&self) -> Vec<Mock> {
        self.mocks.borrow().clone()
    }

    fn groups(&self) -> Vec<Group> {
        self.groups.borrow().clone()
    }

    fn add_mock(&self) -> Mock {
        let mock = Mock {
            id: new_id(),
            ..Mock::default()
        };
        self.mocks.borrow_mut().push(mock.clone());
        debug!(id = %mock.id, "Mock added");
        mock
    }

    fn add_group(&self, name: &str) -> Group {
        let group = Group {
            id: new_id(),
            name: name.to_string(),
        };
        self.groups.borrow_mut().push(group.clone());
        debug!(id = %group.id, name, "Group added");
        group
    }

    fn update_mock(&self, id: &str, mock: Mock) -> Result<()> {
        let mut mocks = self.mocks.borrow_mut();
        let Some(slot) = mocks.iter_mut().find(|m| m.id == id) else {
            return Err(Error::NotFound {
                kind: "mock",
                id: id.to_string(),
            });
        };
        *slot = Mock {
            id: id.to_string(),
            ..mock
        };
        Ok(())
    }

    fn remove_mock(&self, id: &str) -> Result<()> {
        let mut mocks = self.mocks.borrow_mut();
        let before = mocks.len();
        mocks.retain(|m| m.id != id);
        if mocks.len() == before {
            return Err(Error::NotFound {
                kind: "mock",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn remove_group(&self, id: &str) -> Result<()> {
        let mut groups = self.groups.borrow_mut();
        let before = groups.len();
        groups.retain(|g| g.id != id);
        if groups.len() == before {
            return Err(Error::NotFound {
                kind: "group",
                id: id.to_string(),
            });
        }

        for mock in self.mocks.borrow_mut().iter_mut() {
            if mock.group_id.as_deref() == Some(id) {
                mock.group_id = None;
            }
        }
        Ok(())
    }

    fn is_recording(&self) -> bool {
        self.recording.get()
    }

    fn start_recording(&self) {
        self.recording.set(true);
        info!("Recording started");
    }

    fn stop_recording(&self) {
        self.recording.set(false);
        info!("Recording stopped");
    }
}
