//! Domain - Pure Data Structures
//!
//! Configuration plus mock, group and request-log records. Records flow
//! through store fields as payloads; the stores never inspect them.

pub mod config;
pub mod mock;
pub mod request_log;

pub use config::*;
pub use mock::*;
pub use request_log::*;
