//! Mocks Feature
//!
//! Sidebar actions and the mock editor.

pub mod controller;
pub mod editor;

pub use controller::{MocksController, NEW_GROUP_NAME, NewItemKind};
pub use editor::{EditorController, EditorTab, EditorTabs};
