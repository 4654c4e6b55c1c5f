// src/fs/git.rs

//! Rule files as of a fixed git revision.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use tracing::{debug, trace};

use super::FileSystem;

/// Reads files with `git show <rev>:<path>` inside a repository.
///
/// The revision is fixed at construction, so every rule file read during one
/// resolution comes from the same snapshot. Paths are relative to the
/// repository root even when `cwd` is a subdirectory.
#[derive(Debug, Clone)]
pub struct GitFileSystem {
    cwd: PathBuf,
    rev: String,
    /// Whether `rev` names a tree; checked on the first failed read.
    rev_exists: OnceLock<bool>,
}

impl GitFileSystem {
    pub fn new(cwd: impl Into<PathBuf>, rev: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            rev: rev.into(),
            rev_exists: OnceLock::new(),
        }
    }

    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C")
            .arg(&self.cwd)
            .env("LC_ALL", "C")
            .env("LANGUAGE", "C");
        cmd
    }

    /// `git rev-parse --verify` answers through its exit status, which does
    /// not depend on the message language.
    fn revision_exists(&self) -> io::Result<bool> {
        if let Some(exists) = self.rev_exists.get() {
            return Ok(*exists);
        }

        let status = self
            .git()
            .args(["rev-parse", "--verify", "--quiet"])
            .arg(format!("{}^{{tree}}", self.rev))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| io::Error::other(format!("running git rev-parse {}: {e}", self.rev)))?;

        let exists = status.success();
        debug!(rev = %self.rev, exists, "verified revision");
        Ok(*self.rev_exists.get_or_init(|| exists))
    }
}

impl FileSystem for GitFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let rel = path.to_string_lossy().replace('\\', "/");
        let object = format!("{}:{}", self.rev, rel);

        let output = self
            .git()
            .arg("show")
            .arg(&object)
            .output()
            .map_err(|e| io::Error::other(format!("running git show {object}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            trace!(%object, stderr = %stderr.trim(), "git show failed");
            return Err(classify_show_failure(&object, &stderr, self.revision_exists()?));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{object}: {e}")))
    }
}

/// Turn a failed `git show` into an io error.
///
/// If the revision itself resolves, the only thing that can be missing is the
/// path, whatever git printed about it.
pub(crate) fn classify_show_failure(object: &str, stderr: &str, rev_exists: bool) -> io::Error {
    let kind = if rev_exists {
        io::ErrorKind::NotFound
    } else {
        io::ErrorKind::Other
    };
    io::Error::new(kind, format!("git show {object}: {}", stderr.trim()))
}
