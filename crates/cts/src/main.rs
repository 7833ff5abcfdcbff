//! cts: command line ctags search
//!
//! # Usage
//!
//! ```bash
//! cts [--tags PATH] [--strategy full|partial|indexed] [--prefix] [--ignore-case] QUERY
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/cts/config.toml)
//! 3. Environment variables (CTS_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use cts::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
