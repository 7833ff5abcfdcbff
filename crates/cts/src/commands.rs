//! Command implementation for cts.
//!
//! Handles:
//! - Settings: config file and environment, then CLI overrides
//! - Tag file lookup, walking up parent directories
//! - Running the chosen scanner and printing results

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use cts_index::TagFile;
use cts_scan::{build_scanner, Entry, ScanOptions};
use cts_types::{CtsError, OutputFormat, Settings};

use crate::cli::Cli;

/// Load settings and apply CLI overrides (highest precedence).
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(tags) = &cli.tags {
        settings.tag_file = tags.to_string_lossy().to_string();
    }
    if let Some(strategy) = cli.strategy {
        settings.strategy = strategy;
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }
    if cli.prefix {
        settings.prefix = true;
    } else if cli.no_prefix {
        settings.prefix = false;
    }
    if cli.ignore_case {
        settings.ignore_case = true;
    } else if cli.no_ignore_case {
        settings.ignore_case = false;
    }

    Ok(settings)
}

/// Parse settings, set up logging and run the search against stdout.
pub fn run(cli: Cli) -> Result<()> {
    let settings = resolve_settings(&cli)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    search(&cli, &settings, &cwd, &mut out)?;
    out.flush().context("Failed to write results")?;
    Ok(())
}

/// Run the configured scanner for `cli.query` and write results to `out`.
///
/// Returns the number of entries written.
pub fn search(cli: &Cli, settings: &Settings, cwd: &Path, out: &mut impl Write) -> Result<usize> {
    let tag_path = locate_tag_file(&settings.expanded_tag_file(), settings.search_parents, cwd)?;
    let base_dir = match &cli.base_dir {
        Some(dir) => cwd.join(dir),
        None => tag_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf()),
    };

    info!(
        tag_file = ?tag_path,
        base_dir = ?base_dir,
        strategy = %settings.strategy,
        "Searching tags"
    );

    let mut tags = TagFile::open(&tag_path)
        .with_context(|| format!("Failed to open tag file {}", tag_path.display()))?;

    let options = ScanOptions {
        prefix: settings.prefix,
        insensitive: settings.ignore_case,
    };
    let mut scanner = build_scanner(settings.strategy, &mut tags, &base_dir, options);

    let limit = cli.limit.unwrap_or(usize::MAX);
    let mut written = 0;
    for item in scanner.query(&cli.query).take(limit) {
        let entry =
            item.with_context(|| format!("Failed to read tag file {}", tag_path.display()))?;
        write_entry(out, &entry, settings.format)?;
        written += 1;
    }

    debug!(results = written, "Search complete");
    Ok(written)
}

/// Find `tag_file`, relative to `cwd` and then (when `search_parents` is set)
/// to each of its ancestors.
pub fn locate_tag_file(tag_file: &Path, search_parents: bool, cwd: &Path) -> Result<PathBuf> {
    if tag_file.is_absolute() || !search_parents {
        let candidate = cwd.join(tag_file);
        if candidate.is_file() {
            return Ok(candidate);
        }
        return Err(CtsError::TagFileNotFound(candidate.display().to_string()).into());
    }

    for dir in cwd.ancestors() {
        let candidate = dir.join(tag_file);
        if candidate.is_file() {
            debug!(path = ?candidate, "Found tag file");
            return Ok(candidate);
        }
    }

    Err(CtsError::TagFileNotFound(format!(
        "{} (searched from {} upward)",
        tag_file.display(),
        cwd.display()
    ))
    .into())
}

/// `name<TAB>file[:line]<TAB>kind`
pub fn format_plain(entry: &Entry) -> String {
    let location = if entry.line_number() > 0 {
        format!("{}:{}", entry.file().display(), entry.line_number())
    } else {
        entry.file().display().to_string()
    };
    format!(
        "{}\t{}\t{}",
        entry.name(),
        location,
        entry.kind().unwrap_or("-")
    )
}

fn write_entry(out: &mut impl Write, entry: &Entry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", format_plain(entry))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, entry)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
