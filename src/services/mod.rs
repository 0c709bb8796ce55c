//! Service Layer
//!
//! The boundary to the mock server. Controllers call services and then
//! publish the outcome to the stores:
//!
//! ```text
//! UI Action → Controller → MockApi call → Store::update → listeners → re-render
//! ```

mod api;

pub use api::*;
