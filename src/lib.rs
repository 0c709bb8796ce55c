//! Mimic UI Library
//!
//! State layer for the Mimic mock-server inspector: observable stores for
//! each UI domain, a binder that ties a view's subscription to its mount
//! lifecycle, and the controllers that mutate the stores.

pub mod app;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod store;
