//! Features - Vertical Feature Slices
//!
//! Each feature holds the controllers behind one part of the UI. Views bind
//! to the stores; controllers mutate them.

pub mod inline_edit;
pub mod mocks;
pub mod settings;
