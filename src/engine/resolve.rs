// src/engine/resolve.rs

//! Changed paths in, subscriber → files out.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::engine::NotificationMap;
use crate::errors::{CodenotifyError, Result};
use crate::fs::FileSystem;
use crate::rules::{RuleFile, Subscriber, ancestor_dirs, rule_file_path};

/// Resolve which subscribers must be notified for `changed_paths`.
///
/// Paths are processed in the given order, so each subscriber's file list
/// follows that order. A path matched by several rules naming the same
/// subscriber is listed once per matching rule.
pub fn resolve<S: AsRef<str>>(
    fs: &dyn FileSystem,
    changed_paths: &[S],
    rule_filename: &str,
) -> Result<NotificationMap> {
    let mut loader = RuleFileLoader::new(fs, rule_filename);
    let mut notifications = NotificationMap::new();

    for path in changed_paths {
        let path = path.as_ref();
        let ancestry = loader.ancestry(path)?;
        let subscribers = subscribers_in(&ancestry, path);
        debug!(path, ?subscribers, "resolved subscribers");

        for subscriber in subscribers {
            notifications
                .entry(subscriber)
                .or_default()
                .push(path.to_string());
        }
    }

    info!(
        paths = changed_paths.len(),
        subscribers = notifications.len(),
        "resolved notifications"
    );
    Ok(notifications)
}

/// Ordered subscriber list for a single changed path: outermost rule files
/// first, each in file order.
pub fn subscribers_for_path(
    fs: &dyn FileSystem,
    path: &str,
    rule_filename: &str,
) -> Result<Vec<Subscriber>> {
    let ancestry = RuleFileLoader::new(fs, rule_filename).ancestry(path)?;
    Ok(subscribers_in(&ancestry, path))
}

fn subscribers_in(ancestry: &[Rc<RuleFile>], path: &str) -> Vec<Subscriber> {
    ancestry
        .iter()
        .flat_map(|file| file.matching(path))
        .flat_map(|rule| rule.subscribers().iter().cloned())
        .collect()
}

/// Loads rule files for one resolution call.
///
/// Each directory is read and parsed at most once per loader; absent rule
/// files are remembered as `None`.
struct RuleFileLoader<'a> {
    fs: &'a dyn FileSystem,
    rule_filename: &'a str,
    loaded: HashMap<String, Option<Rc<RuleFile>>>,
}

impl<'a> RuleFileLoader<'a> {
    fn new(fs: &'a dyn FileSystem, rule_filename: &'a str) -> Self {
        Self {
            fs,
            rule_filename,
            loaded: HashMap::new(),
        }
    }

    /// Rule files governing `path`, root first, immediate parent last.
    fn ancestry(&mut self, path: &str) -> Result<Vec<Rc<RuleFile>>> {
        let mut files = Vec::new();
        for dir in ancestor_dirs(path) {
            if let Some(file) = self.load(dir)? {
                files.push(file);
            }
        }
        Ok(files)
    }

    fn load(&mut self, dir: String) -> Result<Option<Rc<RuleFile>>> {
        if let Some(cached) = self.loaded.get(&dir) {
            return Ok(cached.clone());
        }

        let path = rule_file_path(&dir, self.rule_filename);
        let file = match self.fs.read_to_string(Path::new(&path)) {
            Ok(content) => {
                let file = RuleFile::parse(dir.clone(), path.as_str(), &content)?;
                debug!(
                    path = file.path(),
                    dir = file.directory(),
                    rules = file.rules().len(),
                    "loaded rule file"
                );
                Some(Rc::new(file))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(path = %path, "no rule file");
                None
            }
            Err(source) => return Err(CodenotifyError::Access { path, source }),
        };

        self.loaded.insert(dir, file.clone());
        Ok(file)
    }
}
