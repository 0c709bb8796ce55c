//! Application Layer
//!
//! Store construction for the three UI domains.

pub mod entities;

pub use entities::AppStores;
