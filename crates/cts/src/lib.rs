//! cts library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Settings resolution, tag file lookup and result printing

pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use commands::{format_plain, locate_tag_file, resolve_settings, run, search};
