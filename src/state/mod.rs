//! State - Per-Domain Store States
//!
//! Each module defines one UI domain's state, its delta type and the
//! store-level helpers that mutate it. Every mutation goes through
//! `Store::update`, so every change reaches the subscribed units.

pub mod mocks_state;
pub mod request_log_state;
pub mod ui_state;

pub use mocks_state::{GroupView, ItemRef, MocksDelta, MocksState};
pub use request_log_state::{RequestLogDelta, RequestLogState};
pub use ui_state::{EditorHeight, UiDelta, UiState, ViewMode};
