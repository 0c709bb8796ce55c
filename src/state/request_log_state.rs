//! RequestLogState - Request Log Layout and Selection

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::AppConfig;
use crate::store::{Store, state_delta};

/// Narrowest a log column can be dragged
pub const MIN_COLUMN_WIDTH: u32 = 40;

/// State for the request log table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestLogState {
    /// Column widths in pixels, by column name
    pub columns: BTreeMap<String, u32>,
    pub selected_request_ids: Vec<String>,
}

state_delta! {
    /// Partial update of [`RequestLogState`]
    pub struct RequestLogDelta for RequestLogState {
        columns: BTreeMap<String, u32>,
        selected_request_ids: Vec<String>,
    }
}

impl RequestLogState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            columns: config.request_log.columns.clone(),
            selected_request_ids: Vec::new(),
        }
    }

    /// Width of a fixed-size column; `None` for autosized ones
    pub fn column_width(&self, cell: &str) -> Option<u32> {
        self.columns.get(cell).copied()
    }
}

impl Store<RequestLogState> {
    /// Set one column's width, keeping the others
    pub fn resize_column(&self, cell: &str, width: u32) {
        let mut columns = self.with(|s| s.columns.clone());
        columns.insert(cell.to_string(), width.max(MIN_COLUMN_WIDTH));
        self.update(RequestLogDelta::default().columns(columns));
    }

    /// Replace the selected rows
    pub fn select_requests(&self, ids: Vec<String>) {
        self.update(RequestLogDelta::default().selected_request_ids(ids));
    }
}
