// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `codenotify`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "codenotify",
    version,
    about = "Work out who to notify about a set of changed files from CODENOTIFY rule files.",
    long_about = None
)]
pub struct CliArgs {
    /// Changed paths, relative to the repository root.
    ///
    /// If none are given they are read from stdin, one per line, e.g.
    /// `git diff --name-only main... | codenotify`.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Repository root.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub cwd: PathBuf,

    /// Read rule files as of this git revision instead of the working tree.
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Base name of the rule files (default: `CODENOTIFY`).
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Author of the change; never notified about their own change.
    #[arg(long, value_name = "HANDLE")]
    pub author: Option<String>,

    /// Don't notify anyone if more than this many subscribers match
    /// (0 = no limit).
    #[arg(long, value_name = "N")]
    pub subscriber_threshold: Option<usize>,

    /// Path to a config file (TOML).
    ///
    /// Default: `Codenotify.toml` in the repository root, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CODENOTIFY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
