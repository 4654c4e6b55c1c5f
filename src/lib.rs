// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod rules;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_or_default, validate_filename};
use crate::engine::{NotificationMap, exceeds_threshold, exclude_subscriber, exclude_subscribers};
use crate::fs::{FileSystem, GitFileSystem, RealFileSystem};

pub use crate::engine::resolve;

/// Effective options after merging the config file with CLI flags.
#[derive(Debug, Clone)]
pub struct Options {
    pub filename: String,
    pub subscriber_threshold: usize,
    pub ignore: Vec<String>,
    pub author: Option<String>,
}

impl Options {
    /// CLI flags win over config file values.
    pub fn merge(cfg: &ConfigFile, args: &CliArgs) -> crate::errors::Result<Self> {
        let filename = match &args.filename {
            Some(name) => {
                validate_filename(name)?;
                name.clone()
            }
            None => cfg.filename().to_string(),
        };

        Ok(Self {
            filename,
            subscriber_threshold: args
                .subscriber_threshold
                .unwrap_or_else(|| cfg.subscriber_threshold()),
            ignore: cfg.ignore().to_vec(),
            author: args.author.clone(),
        })
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the rule-file accessor (working tree or git revision)
/// - reading changed paths
/// - resolution, filtering and the report on stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref(), &args.cwd).context("loading config")?;
    let opts = Options::merge(&cfg, &args)?;

    let paths = if args.paths.is_empty() {
        read_paths(io::stdin().lock()).context("reading changed paths from stdin")?
    } else {
        args.paths.iter().map(|p| normalize_path(p)).collect()
    };

    let fs: Box<dyn FileSystem> = match &args.rev {
        Some(rev) => Box::new(GitFileSystem::new(&args.cwd, rev.as_str())),
        None => Box::new(RealFileSystem::new(&args.cwd)),
    };
    info!(filename = %opts.filename, paths = paths.len(), rev = ?args.rev, "resolving notifications");

    let notifs = notifications(fs.as_ref(), &paths, &opts)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_notifications(&mut out, &notifs, opts.subscriber_threshold)?;
    out.flush()?;
    Ok(())
}

/// Resolve `paths` and apply the ignore list and author exclusion.
pub fn notifications(
    fs: &dyn FileSystem,
    paths: &[String],
    opts: &Options,
) -> crate::errors::Result<NotificationMap> {
    let mut notifs = resolve(fs, paths, &opts.filename)?;
    exclude_subscribers(&mut notifs, &opts.ignore);
    if let Some(author) = &opts.author {
        exclude_subscriber(&mut notifs, author);
    }
    Ok(notifs)
}

/// Read changed paths, one per line, skipping empty lines.
///
/// Only a trailing `\r` is stripped; other whitespace is part of the path.
pub fn read_paths(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            paths.push(normalize_path(line));
        }
    }
    Ok(paths)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Plain report: one `subscriber -> file, file` line per subscriber.
pub fn write_notifications(
    w: &mut impl Write,
    notifs: &NotificationMap,
    subscriber_threshold: usize,
) -> io::Result<()> {
    if exceeds_threshold(notifs, subscriber_threshold) {
        warn!(
            subscribers = notifs.len(),
            threshold = subscriber_threshold,
            "subscriber threshold exceeded"
        );
        return writeln!(
            w,
            "Not notifying subscribers because the number of notifying subscribers ({}) has exceeded the threshold ({}).",
            notifs.len(),
            subscriber_threshold
        );
    }

    if notifs.is_empty() {
        return writeln!(w, "No notifications.");
    }

    for (subscriber, files) in notifs {
        writeln!(w, "{} -> {}", subscriber, files.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NotificationMap {
        let mut notifs = NotificationMap::new();
        notifs.insert("@js".into(), vec!["file.js".into(), "dir/file.js".into()]);
        notifs.insert("@go".into(), vec!["file.go".into(), "dir/file.go".into()]);
        notifs
    }

    fn render(notifs: &NotificationMap, threshold: usize) -> String {
        let mut out = Vec::new();
        write_notifications(&mut out, notifs, threshold).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_sorted_by_subscriber() {
        assert_eq!(
            render(&sample(), 0),
            "@go -> file.go, dir/file.go\n@js -> file.js, dir/file.js\n"
        );
    }

    #[test]
    fn empty_report() {
        assert_eq!(render(&NotificationMap::new(), 0), "No notifications.\n");
    }

    #[test]
    fn threshold_suppresses_report() {
        assert_eq!(
            render(&sample(), 1),
            "Not notifying subscribers because the number of notifying subscribers (2) has exceeded the threshold (1).\n"
        );
    }

    #[test]
    fn paths_from_lines() {
        let input = "file.md\n\ndir\\file.go\r\n";
        assert_eq!(read_paths(input.as_bytes()).unwrap(), vec!["file.md", "dir/file.go"]);
    }

    #[test]
    fn paths_keep_inner_and_edge_spaces() {
        let input = "my notes.md\n trailing.md \r\n";
        assert_eq!(
            read_paths(input.as_bytes()).unwrap(),
            vec!["my notes.md", " trailing.md "]
        );
    }

    #[test]
    fn cli_flags_override_config() {
        let args = CliArgs {
            paths: vec![],
            cwd: ".".into(),
            rev: None,
            filename: Some("OWNERS".into()),
            author: Some("@me".into()),
            subscriber_threshold: Some(3),
            config: None,
            log_level: None,
        };
        let opts = Options::merge(&ConfigFile::default(), &args).unwrap();
        assert_eq!(opts.filename, "OWNERS");
        assert_eq!(opts.subscriber_threshold, 3);
        assert_eq!(opts.author.as_deref(), Some("@me"));

        let bad = CliArgs {
            filename: Some("a/b".into()),
            ..args
        };
        assert!(Options::merge(&ConfigFile::default(), &bad).is_err());
    }
}
