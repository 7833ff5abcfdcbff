//! CLI argument parsing for cts.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use clap::Parser;
use cts_types::{OutputFormat, ScanStrategy};

/// Search a ctags tag file
///
/// Looks up symbols in a pre-built tag file and prints their locations with
/// absolute paths.
#[derive(Parser, Debug)]
#[command(name = "cts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbol name (indexed), substring (partial) or anything (full)
    #[arg(default_value = "")]
    pub query: String,

    /// Tag file (default from config, searched upward from the current directory)
    #[arg(short, long)]
    pub tags: Option<PathBuf>,

    /// Directory tag file paths are relative to (default: the tag file's directory)
    #[arg(short, long)]
    pub base_dir: Option<PathBuf>,

    /// Query strategy: full, partial or indexed
    #[arg(short, long)]
    pub strategy: Option<ScanStrategy>,

    /// Match names starting with the query (indexed strategy)
    #[arg(short, long, overrides_with = "no_prefix")]
    pub prefix: bool,

    /// Match whole names even if the config enables prefix matching
    #[arg(long, overrides_with = "prefix")]
    pub no_prefix: bool,

    /// Ignore case when matching
    #[arg(short = 'i', long, overrides_with = "no_ignore_case")]
    pub ignore_case: bool,

    /// Match case even if the config enables ignore-case
    #[arg(long, overrides_with = "ignore_case")]
    pub no_ignore_case: bool,

    /// Output format: plain or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Stop after this many results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Path to config file (overrides default ~/.config/cts/config.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_query_only() {
        let cli = Cli::parse_from(["cts", "main"]);
        assert_eq!(cli.query, "main");
        assert!(cli.tags.is_none());
        assert!(cli.strategy.is_none());
        assert!(!cli.prefix);
        assert!(!cli.ignore_case);
    }

    #[test]
    fn test_cli_empty_query_defaults() {
        let cli = Cli::parse_from(["cts", "--strategy", "full"]);
        assert_eq!(cli.query, "");
        assert_eq!(cli.strategy, Some(ScanStrategy::Full));
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::parse_from([
            "cts",
            "-t",
            "build/tags",
            "-b",
            "/src",
            "-s",
            "partial",
            "-p",
            "-i",
            "-f",
            "json",
            "-n",
            "5",
            "-c",
            "cts.toml",
            "-l",
            "debug",
            "parse",
        ]);
        assert_eq!(cli.query, "parse");
        assert_eq!(cli.tags, Some(PathBuf::from("build/tags")));
        assert_eq!(cli.base_dir, Some(PathBuf::from("/src")));
        assert_eq!(cli.strategy, Some(ScanStrategy::Partial));
        assert!(cli.prefix);
        assert!(cli.ignore_case);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.limit, Some(5));
        assert_eq!(cli.config.as_deref(), Some("cts.toml"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_negated_match_flags() {
        let cli = Cli::parse_from(["cts", "--no-prefix", "--no-ignore-case", "x"]);
        assert!(!cli.prefix);
        assert!(cli.no_prefix);
        assert!(!cli.ignore_case);
        assert!(cli.no_ignore_case);
    }

    #[test]
    fn test_cli_last_match_flag_wins() {
        let cli = Cli::parse_from(["cts", "-p", "--no-prefix", "--no-ignore-case", "-i", "x"]);
        assert!(!cli.prefix);
        assert!(cli.no_prefix);
        assert!(cli.ignore_case);
        assert!(!cli.no_ignore_case);
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["cts", "--strategy", "fuzzy", "x"]).is_err());
    }
}
