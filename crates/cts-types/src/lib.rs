//! # cts-types
//!
//! Shared types for the cts tag search tools.
//!
//! - Settings: layered configuration (defaults, config file, environment)
//! - Strategy and output format selectors
//! - Errors shared by the front end

pub mod config;
pub mod error;
pub mod strategy;

pub use config::Settings;
pub use error::CtsError;
pub use strategy::{OutputFormat, ScanStrategy};
